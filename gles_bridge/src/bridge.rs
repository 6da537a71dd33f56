/// GlesBridge - owned binding object for the external rendering library
///
/// This module provides the binding object that loads the rendering library
/// at most once and forwards renderer-control calls to it. The bridge owns
/// the loaded library; callers create one bridge and pass it by reference,
/// so there is no process-wide mutable state and `&mut self` on initialize
/// rules out concurrent initialization.

use crate::error::{Error, Result};
use crate::library::{NativeWindow, RenderLibrary, RENDERER_BASE_PORT};
use crate::{bridge_debug, bridge_error, bridge_info, bridge_trace};

const SOURCE: &str = "glesbridge::Bridge";

/// Binding object for the external GLES rendering library
///
/// Starts unloaded. `initialize` runs a loader once (library open plus
/// symbol resolution happen inside it) and keeps the resulting
/// `RenderLibrary` for the rest of the bridge's lifetime; every other
/// operation forwards to it, or fails/no-ops while unloaded.
///
/// # Example
///
/// ```no_run
/// use gles_bridge::GlesBridge;
/// use gles_bridge_backend_dynlib::DynRenderLibrary;
///
/// let mut bridge = GlesBridge::new();
/// bridge.initialize(DynRenderLibrary::boxed_loader())?;
/// bridge.start_renderer(640, 480)?;
/// # Ok::<(), gles_bridge::Error>(())
/// ```
pub struct GlesBridge {
    /// The loaded library; None is the "unloaded" sentinel
    library: Option<Box<dyn RenderLibrary>>,

    /// One-shot transport initialization hook, fired after the first
    /// successful initialize. Absent in standalone builds.
    transport_hook: Option<Box<dyn FnOnce() + Send>>,
}

impl GlesBridge {
    /// Create an unloaded bridge without a transport hook
    ///
    /// This is the standalone flavor: no transport subsystem is notified
    /// when the library comes up.
    pub fn new() -> Self {
        Self {
            library: None,
            transport_hook: None,
        }
    }

    /// Create an unloaded bridge carrying a transport initialization hook
    ///
    /// The hook is invoked exactly once, after the first fully successful
    /// `initialize`. Its return value (if any) is not consulted.
    ///
    /// # Arguments
    ///
    /// * `hook` - Transport initialization callback (e.g. pipe setup)
    pub fn with_transport_hook<H: FnOnce() + Send + 'static>(hook: H) -> Self {
        Self {
            library: None,
            transport_hook: Some(Box::new(hook)),
        }
    }

    /// Whether a library is currently bound
    pub fn is_initialized(&self) -> bool {
        self.library.is_some()
    }

    // ===== LIFECYCLE =====

    /// Load and initialize the rendering library
    ///
    /// Idempotent: once a library is bound, further calls return Ok
    /// immediately without invoking the loader again.
    ///
    /// The loader performs the library open and symbol resolution and
    /// returns the bound `RenderLibrary` (see
    /// `DynRenderLibrary::boxed_loader` in the dynlib backend crate). After
    /// it succeeds, the library's own init entry point runs; if that
    /// reports failure the library is dropped again, releasing its handle,
    /// and the bridge stays unloaded so a later attempt can retry.
    ///
    /// # Errors
    ///
    /// - `LoadFailed` / `MissingSymbol` propagated from the loader
    /// - `InitializationFailed` when the library's init entry point
    ///   reports failure
    pub fn initialize<F>(&mut self, load: F) -> Result<()>
    where
        F: FnOnce() -> Result<Box<dyn RenderLibrary>>,
    {
        if self.library.is_some() {
            bridge_debug!(SOURCE, "GLES emulation already initialized");
            return Ok(());
        }

        bridge_debug!(SOURCE, "Initializing hardware GLES emulation support");

        let library = load().map_err(|error| {
            bridge_error!(SOURCE, "{}", error);
            error
        })?;

        if !library.init_library() {
            // Dropping the library here releases its handle; the bridge
            // stays unloaded and a later initialize may retry.
            bridge_error!(SOURCE, "GLES emulation library could not be initialized!");
            return Err(Error::InitializationFailed(
                "rendering library rejected initialization".to_string(),
            ));
        }

        if let Some(hook) = self.transport_hook.take() {
            bridge_debug!(SOURCE, "Running transport initialization hook");
            hook();
        }

        self.library = Some(library);
        bridge_info!(SOURCE, "GLES emulation initialized");
        Ok(())
    }

    // ===== RENDERER CONTROL =====

    /// Start the renderer at the given framebuffer size
    ///
    /// Forwards `(width, height, RENDERER_BASE_PORT)` to the library's
    /// renderer-init entry point.
    ///
    /// # Errors
    ///
    /// - `NotInitialized` before a successful `initialize`
    /// - `BackendError` when the library reports a nonzero failure code
    pub fn start_renderer(&self, width: i32, height: i32) -> Result<()> {
        let library = self.library.as_ref().ok_or_else(|| {
            bridge_debug!(SOURCE, "Can't start renderer without support libraries");
            Error::NotInitialized
        })?;

        let code = library.init_renderer(width, height, RENDERER_BASE_PORT);
        if code != 0 {
            bridge_debug!(SOURCE, "Can't start renderer (code {})", code);
            return Err(Error::BackendError(format!(
                "renderer start failed (code {})",
                code
            )));
        }

        bridge_debug!(SOURCE, "Renderer started ({}x{})", width, height);
        Ok(())
    }

    /// Stop the renderer
    ///
    /// No-op while unloaded.
    pub fn stop_renderer(&self) {
        if let Some(library) = &self.library {
            bridge_debug!(SOURCE, "Stopping renderer");
            library.stop_renderer();
        }
    }

    // ===== SUBWINDOW CONTROL =====

    /// Create the rendering subwindow inside a host window
    ///
    /// All arguments are forwarded to the library's subwindow-create entry
    /// point and its result code is returned untransformed; the library
    /// defines the success/failure encoding.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before a successful `initialize`
    pub fn show_window(
        &self,
        window: NativeWindow,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rotation: f32,
    ) -> Result<i32> {
        let library = self.library.as_ref().ok_or(Error::NotInitialized)?;
        bridge_trace!(
            SOURCE,
            "Creating subwindow at ({}, {}) size {}x{} rotation {}",
            x,
            y,
            width,
            height,
            rotation
        );
        Ok(library.create_subwindow(window, x, y, width, height, rotation))
    }

    /// Destroy the rendering subwindow
    ///
    /// Returns the library's result code untransformed.
    ///
    /// # Errors
    ///
    /// `NotInitialized` before a successful `initialize`
    pub fn hide_window(&self) -> Result<i32> {
        let library = self.library.as_ref().ok_or(Error::NotInitialized)?;
        bridge_trace!(SOURCE, "Destroying subwindow");
        Ok(library.destroy_subwindow())
    }

    /// Repaint the display
    ///
    /// No-op while unloaded.
    pub fn redraw_window(&self) {
        if let Some(library) = &self.library {
            bridge_trace!(SOURCE, "Repainting display");
            library.repaint_display();
        }
    }
}

impl Default for GlesBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
