//! Integration tests for logging through the public API
//!
//! Verifies that bridge operations emit diagnostics through a custom
//! logger installed with set_logger. The logger slot is process-wide, so
//! these tests run serialized.

use std::sync::{Arc, Mutex};

use gles_bridge::glesbridge::log::{LogEntry, LogSeverity, Logger};
use gles_bridge::glesbridge::{Error, GlesBridge};
use gles_bridge::{log, MockRenderLibrary, RenderLibrary};
use serial_test::serial;

/// Logger capturing entries for assertions
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger {
        entries: Arc::clone(&entries),
    });
    entries
}

#[test]
#[serial]
fn test_integration_successful_initialize_logs_info() {
    let entries = install_capture();

    let mut bridge = GlesBridge::new();
    bridge
        .initialize(|| Ok(Box::new(MockRenderLibrary::new()) as Box<dyn RenderLibrary>))
        .unwrap();

    {
        let captured = entries.lock().unwrap();
        assert!(
            captured
                .iter()
                .any(|e| e.severity == LogSeverity::Info && e.message.contains("initialized")),
            "Successful initialize should log at Info"
        );
        assert!(captured.iter().all(|e| e.source.starts_with("glesbridge::")));
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_failed_load_logs_error_with_location() {
    let entries = install_capture();

    let mut bridge = GlesBridge::new();
    let _ = bridge.initialize(|| {
        Err(Error::LoadFailed(
            "cannot open shared object file".to_string(),
        ))
    });

    {
        let captured = entries.lock().unwrap();
        let error_entry = captured
            .iter()
            .find(|e| e.severity == LogSeverity::Error)
            .expect("failed load should log at Error");
        assert!(error_entry.message.contains("cannot open shared object file"));
        // Error entries carry file:line diagnostics
        assert!(error_entry.file.is_some());
        assert!(error_entry.line.is_some());
    }

    log::reset_logger();
}

#[test]
#[serial]
fn test_integration_guarded_start_logs_debug_only() {
    let entries = install_capture();

    let bridge = GlesBridge::new();
    let _ = bridge.start_renderer(640, 480);

    {
        let captured = entries.lock().unwrap();
        // The guard clause is a diagnostic, not an error report
        assert!(captured
            .iter()
            .any(|e| e.severity == LogSeverity::Debug
                && e.message.contains("without support libraries")));
        assert!(!captured.iter().any(|e| e.severity == LogSeverity::Error));
    }

    log::reset_logger();
}
