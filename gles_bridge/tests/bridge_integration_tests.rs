//! Integration tests for the bridge lifecycle
//!
//! These tests verify the complete bridge workflow through the public API.
//! Tests requiring the real rendering library are marked with #[ignore].
//!
//! Run with: cargo test --test bridge_integration_tests -- --ignored

use std::ffi::c_void;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gles_bridge::glesbridge::library::{MockCall, MockRenderLibrary, NativeWindow};
use gles_bridge::glesbridge::{Error, GlesBridge, Result};
use gles_bridge::{RenderLibrary, RENDERER_BASE_PORT};
use gles_bridge_backend_dynlib::DynRenderLibrary;

// ============================================================================
// BRIDGE LIFECYCLE TESTS
// ============================================================================

#[test]
fn test_integration_bridge_full_lifecycle() {
    // Step 1: Create an unloaded bridge
    let mut bridge = GlesBridge::new();
    assert!(!bridge.is_initialized());

    // Step 2: Initialize with a mock library
    let mock = MockRenderLibrary::new();
    let calls = Arc::clone(&mock.calls);
    let result = bridge.initialize(|| Ok(Box::new(mock) as Box<dyn RenderLibrary>));
    assert!(result.is_ok(), "Bridge initialization should succeed");
    assert!(bridge.is_initialized());

    // Step 3: Start the renderer
    let result = bridge.start_renderer(640, 480);
    assert!(result.is_ok(), "Renderer start should succeed");

    // Step 4: Show, redraw, hide the subwindow
    let window = NativeWindow::from_raw(0x77usize as *mut c_void);
    assert_eq!(bridge.show_window(window, 0, 0, 100, 100, 0.0).unwrap(), 0);
    bridge.redraw_window();
    assert_eq!(bridge.hide_window().unwrap(), 0);

    // Step 5: Stop the renderer
    bridge.stop_renderer();

    // Step 6: Verify the exact forwarded sequence
    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            MockCall::InitLibrary,
            MockCall::InitRenderer {
                width: 640,
                height: 480,
                port: RENDERER_BASE_PORT,
            },
            MockCall::CreateSubwindow {
                window: 0x77,
                x: 0,
                y: 0,
                width: 100,
                height: 100,
                rotation: 0.0,
            },
            MockCall::RepaintDisplay,
            MockCall::DestroySubwindow,
            MockCall::StopRenderer,
        ]
    );
}

#[test]
fn test_integration_failed_load_then_retry() {
    let mut bridge = GlesBridge::new();

    // First attempt: library missing
    let result = bridge.initialize(|| {
        Err(Error::LoadFailed(
            "libOpenglRender.so: cannot open shared object file".to_string(),
        ))
    });
    assert!(result.is_err());
    assert!(!bridge.is_initialized());

    // Forwarding calls during the unloaded window keep failing safely
    assert!(matches!(
        bridge.start_renderer(640, 480),
        Err(Error::NotInitialized)
    ));
    bridge.redraw_window();

    // Second attempt succeeds and the bridge is fully usable
    bridge
        .initialize(|| Ok(Box::new(MockRenderLibrary::new()) as Box<dyn RenderLibrary>))
        .unwrap();
    assert!(bridge.start_renderer(320, 240).is_ok());
}

#[test]
fn test_integration_transport_hook_with_lifecycle() {
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_in_hook = Arc::clone(&fired);
    let mut bridge = GlesBridge::with_transport_hook(move || {
        fired_in_hook.fetch_add(1, Ordering::SeqCst);
    });

    bridge
        .initialize(|| Ok(Box::new(MockRenderLibrary::new()) as Box<dyn RenderLibrary>))
        .unwrap();
    bridge
        .initialize(|| Ok(Box::new(MockRenderLibrary::new()) as Box<dyn RenderLibrary>))
        .unwrap();

    assert_eq!(
        fired.load(Ordering::SeqCst),
        1,
        "Transport hook should fire exactly once"
    );
}

#[test]
fn test_integration_bridge_is_send() {
    // A bridge bound to a Send + Sync library can move across threads
    let mut bridge = GlesBridge::new();
    bridge
        .initialize(|| Ok(Box::new(MockRenderLibrary::new()) as Box<dyn RenderLibrary>))
        .unwrap();

    let handle = std::thread::spawn(move || bridge.start_renderer(640, 480));
    assert!(handle.join().unwrap().is_ok());
}

// ============================================================================
// REAL LIBRARY TESTS
// ============================================================================

#[test]
#[ignore] // Requires libOpenglRender on the loader search path
fn test_integration_real_library_lifecycle() {
    let mut bridge = GlesBridge::new();
    let result: Result<()> = bridge.initialize(DynRenderLibrary::boxed_loader());
    assert!(result.is_ok(), "Real library initialization should succeed");

    bridge.start_renderer(640, 480).unwrap();
    bridge.redraw_window();
    bridge.stop_renderer();
}
