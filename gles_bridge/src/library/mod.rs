/// Library module - the render library trait and handle types

// Module declarations
pub mod render_library;
pub mod native_window;
pub mod mock_render_library;

// Re-export everything from render_library.rs
pub use render_library::*;

// Re-export from other modules
pub use native_window::*;
pub use mock_render_library::*;
