//! Unit tests for dynlib_render_library.rs
//!
//! Loading the real rendering library needs it on the loader search path,
//! so these tests only cover the failure paths and the symbol table.

use gles_bridge::Error;

use crate::dynlib_render_library::{DynRenderLibrary, RENDERER_LIB_NAME, REQUIRED_SYMBOLS};

#[test]
fn test_required_symbols_exact_names() {
    assert_eq!(
        REQUIRED_SYMBOLS,
        [
            "initLibrary",
            "initOpenGLRenderer",
            "createOpenGLSubwindow",
            "destroyOpenGLSubwindow",
            "repaintOpenGLDisplay",
            "stopOpenGLRenderer",
        ]
    );
}

#[test]
fn test_renderer_lib_name() {
    assert_eq!(RENDERER_LIB_NAME, "libOpenglRender");
}

#[test]
fn test_load_named_missing_library_fails() {
    let result = DynRenderLibrary::load_named("libGlesBridgeNoSuchRenderer");
    match result {
        Err(Error::LoadFailed(reason)) => {
            // The platform loader's message must be preserved
            assert!(!reason.is_empty());
        }
        Ok(_) => panic!("loading a nonexistent library must fail"),
        Err(other) => panic!("expected LoadFailed, got {:?}", other),
    }
}

#[test]
fn test_load_named_missing_library_is_retryable() {
    // A failed load leaves nothing half-open; trying again just fails the
    // same way instead of panicking or leaking state.
    assert!(DynRenderLibrary::load_named("libGlesBridgeNoSuchRenderer").is_err());
    assert!(DynRenderLibrary::load_named("libGlesBridgeNoSuchRenderer").is_err());
}
