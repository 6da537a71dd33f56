/*!
# GLES Bridge - Dynamic Library Backend

Real implementation of the `gles_bridge` traits.

This crate opens the external "OpenglRender" shared library through the
libloading crate, resolves its six exported entry points into typed
function pointers, and implements `RenderLibrary` by forwarding through
them. All load and resolution failures surface as `gles_bridge` errors
carrying the platform loader's message.
*/

// Implementation modules
mod dynlib_render_library;

pub use dynlib_render_library::{DynRenderLibrary, RENDERER_LIB_NAME, REQUIRED_SYMBOLS};
