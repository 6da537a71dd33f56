/*!
# GLES Bridge

Core traits and types for the GLES emulation bridge.

This crate provides the platform-agnostic API for binding to an external
GLES rendering library at runtime. The library itself is abstracted behind
the `RenderLibrary` trait (six renderer-control operations); the real
implementation (`gles_bridge_backend_dynlib`) resolves those operations from
a shared library loaded at process start, while `MockRenderLibrary` serves
tests and development without any native library.

## Architecture

- **GlesBridge**: owned binding object; loads a library once and forwards
  renderer-control calls to it
- **RenderLibrary**: trait exposing the six entry points of the external
  rendering library
- **NativeWindow**: opaque host window handle passed through to the library
- **MockRenderLibrary**: recording fake for tests

Backend implementations provide concrete types that implement `RenderLibrary`.
*/

// Internal modules
mod error;
mod bridge;
pub mod log;
pub mod library;

// Main glesbridge namespace module
pub mod glesbridge {
    // Error types
    pub use crate::error::{Error, Result};

    // Bridge binding object
    pub use crate::bridge::GlesBridge;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: bridge_* macros are NOT re-exported here - they are internal only
    }

    // Library sub-module with the trait and handle types
    pub mod library {
        pub use crate::library::*;
    }
}

// Re-export main types at crate root
pub use crate::error::{Error, Result};
pub use crate::bridge::GlesBridge;
pub use crate::library::{
    MockRenderLibrary, NativeWindow, RenderLibrary, RENDERER_BASE_PORT,
};
