/// RenderLibrary trait - the six entry points of the external rendering library

use crate::library::NativeWindow;

/// Base port forwarded to the renderer's init entry point.
///
/// The renderer listens for guest connections starting at this port.
pub const RENDERER_BASE_PORT: i32 = 22468;

/// Interface to a loaded GLES rendering library
///
/// One method per exported entry point of the external library. The real
/// implementation (`DynRenderLibrary` in the dynlib backend crate) forwards
/// through function pointers resolved at load time; `MockRenderLibrary`
/// records calls for tests.
///
/// Result-code conventions follow the external library: `init_renderer`
/// returns zero on success, while `create_subwindow` and
/// `destroy_subwindow` use the library's own encoding, which callers pass
/// through untransformed.
pub trait RenderLibrary: Send + Sync {
    /// One-time internal initialization of the loaded library
    ///
    /// # Returns
    ///
    /// `false` when the library reports it is unusable; the caller must
    /// then release it.
    fn init_library(&self) -> bool;

    /// Start the renderer
    ///
    /// # Arguments
    ///
    /// * `width` - Framebuffer width in pixels
    /// * `height` - Framebuffer height in pixels
    /// * `port` - Base port the renderer listens on
    ///
    /// # Returns
    ///
    /// Zero on success, a nonzero failure code otherwise
    fn init_renderer(&self, width: i32, height: i32, port: i32) -> i32;

    /// Create a rendering subwindow inside a host window
    ///
    /// # Arguments
    ///
    /// * `window` - Host window handle
    /// * `x`, `y` - Subwindow origin within the host window
    /// * `width`, `height` - Subwindow size in pixels
    /// * `rotation` - Display rotation in degrees
    ///
    /// # Returns
    ///
    /// The library's result code, passed through untransformed
    fn create_subwindow(
        &self,
        window: NativeWindow,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rotation: f32,
    ) -> i32;

    /// Destroy the rendering subwindow
    ///
    /// # Returns
    ///
    /// The library's result code, passed through untransformed
    fn destroy_subwindow(&self) -> i32;

    /// Repaint the display
    fn repaint_display(&self);

    /// Stop the renderer
    fn stop_renderer(&self);
}
