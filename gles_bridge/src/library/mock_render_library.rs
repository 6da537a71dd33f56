/// Mock render library for tests (no native library required)
///
/// This mock records every forwarded call with its arguments, so tests can
/// assert exactly what reached the library. Per-operation results are
/// configurable to exercise the failure paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::library::{NativeWindow, RenderLibrary};

/// One recorded call into the mock
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    InitLibrary,
    InitRenderer {
        width: i32,
        height: i32,
        port: i32,
    },
    CreateSubwindow {
        /// Window handle recorded as its pointer value
        window: usize,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rotation: f32,
    },
    DestroySubwindow,
    RepaintDisplay,
    StopRenderer,
}

/// Recording fake implementing `RenderLibrary`
pub struct MockRenderLibrary {
    /// Every call made so far, in order. Clone the Arc before handing the
    /// mock to a bridge to keep asserting afterwards.
    pub calls: Arc<Mutex<Vec<MockCall>>>,

    /// Result returned by `init_library` (default: true)
    pub init_library_result: bool,

    /// Result returned by `init_renderer` (default: 0, success)
    pub init_renderer_result: i32,

    /// Result returned by `create_subwindow` (default: 0)
    pub create_subwindow_result: i32,

    /// Result returned by `destroy_subwindow` (default: 0)
    pub destroy_subwindow_result: i32,

    /// Set to true when the mock is dropped (library handle released)
    pub dropped: Option<Arc<AtomicBool>>,
}

impl MockRenderLibrary {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            init_library_result: true,
            init_renderer_result: 0,
            create_subwindow_result: 0,
            destroy_subwindow_result: 0,
            dropped: None,
        }
    }

    /// Create a mock whose `init_library` reports failure
    pub fn failing_init() -> Self {
        let mut mock = Self::new();
        mock.init_library_result = false;
        mock
    }

    /// Observe the mock's drop through the given flag
    pub fn with_drop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.dropped = Some(flag);
        self
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for MockRenderLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLibrary for MockRenderLibrary {
    fn init_library(&self) -> bool {
        self.record(MockCall::InitLibrary);
        self.init_library_result
    }

    fn init_renderer(&self, width: i32, height: i32, port: i32) -> i32 {
        self.record(MockCall::InitRenderer {
            width,
            height,
            port,
        });
        self.init_renderer_result
    }

    fn create_subwindow(
        &self,
        window: NativeWindow,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rotation: f32,
    ) -> i32 {
        self.record(MockCall::CreateSubwindow {
            window: window.as_ptr() as usize,
            x,
            y,
            width,
            height,
            rotation,
        });
        self.create_subwindow_result
    }

    fn destroy_subwindow(&self) -> i32 {
        self.record(MockCall::DestroySubwindow);
        self.destroy_subwindow_result
    }

    fn repaint_display(&self) {
        self.record(MockCall::RepaintDisplay);
    }

    fn stop_renderer(&self) {
        self.record(MockCall::StopRenderer);
    }
}

impl Drop for MockRenderLibrary {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropped {
            flag.store(true, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
#[path = "mock_render_library_tests.rs"]
mod tests;
