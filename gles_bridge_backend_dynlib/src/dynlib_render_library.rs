/// DynRenderLibrary - libloading-backed implementation of RenderLibrary

use std::ffi::{c_float, c_int, c_void};

use libloading::Library;

use gles_bridge::bridge_debug;
use gles_bridge::{Error, NativeWindow, RenderLibrary, Result};

const SOURCE: &str = "glesbridge::dynlib";

/// Logical name of the GLES rendering library
///
/// The platform's shared-library extension is appended at load time
/// (`libOpenglRender.so`, `libOpenglRender.dll`, `libOpenglRender.dylib`).
pub const RENDERER_LIB_NAME: &str = "libOpenglRender";

const SYM_INIT_LIBRARY: &str = "initLibrary";
const SYM_INIT_RENDERER: &str = "initOpenGLRenderer";
const SYM_CREATE_SUBWINDOW: &str = "createOpenGLSubwindow";
const SYM_DESTROY_SUBWINDOW: &str = "destroyOpenGLSubwindow";
const SYM_REPAINT_DISPLAY: &str = "repaintOpenGLDisplay";
const SYM_STOP_RENDERER: &str = "stopOpenGLRenderer";

/// The exports the rendering library must provide, by exact name
///
/// Partial resolution is total failure: if any of these is missing the
/// library handle is released.
pub const REQUIRED_SYMBOLS: [&str; 6] = [
    SYM_INIT_LIBRARY,
    SYM_INIT_RENDERER,
    SYM_CREATE_SUBWINDOW,
    SYM_DESTROY_SUBWINDOW,
    SYM_REPAINT_DISPLAY,
    SYM_STOP_RENDERER,
];

/// Resolved entry points of the rendering library
///
/// Signatures must match the library's exports exactly.
struct RenderApi {
    init_library: unsafe extern "C" fn() -> c_int,
    init_renderer: unsafe extern "C" fn(c_int, c_int, c_int) -> c_int,
    create_subwindow:
        unsafe extern "C" fn(*mut c_void, c_int, c_int, c_int, c_int, c_float) -> c_int,
    destroy_subwindow: unsafe extern "C" fn() -> c_int,
    repaint_display: unsafe extern "C" fn(),
    stop_renderer: unsafe extern "C" fn(),
}

impl RenderApi {
    /// Resolve every required symbol from the loaded library
    ///
    /// # Errors
    ///
    /// `MissingSymbol` naming the first absent export; the caller then
    /// drops the library, releasing its handle.
    fn resolve(library: &Library) -> Result<Self> {
        Ok(Self {
            init_library: resolve_symbol(library, SYM_INIT_LIBRARY)?,
            init_renderer: resolve_symbol(library, SYM_INIT_RENDERER)?,
            create_subwindow: resolve_symbol(library, SYM_CREATE_SUBWINDOW)?,
            destroy_subwindow: resolve_symbol(library, SYM_DESTROY_SUBWINDOW)?,
            repaint_display: resolve_symbol(library, SYM_REPAINT_DISPLAY)?,
            stop_renderer: resolve_symbol(library, SYM_STOP_RENDERER)?,
        })
    }
}

/// Look up one named export and copy out its function pointer
fn resolve_symbol<T: Copy>(library: &Library, symbol: &'static str) -> Result<T> {
    // SAFETY: the caller (RenderApi::resolve) requests pointer types that
    // match the library's exported signatures; the pointers are only used
    // while the Library is alive (DynRenderLibrary owns both).
    let resolved = unsafe { library.get::<T>(symbol.as_bytes()) }.map_err(|error| {
        bridge_debug!(SOURCE, "Symbol lookup failed for {}", symbol);
        Error::MissingSymbol {
            symbol,
            reason: error.to_string(),
        }
    })?;
    Ok(*resolved)
}

/// RenderLibrary implementation bound to a shared library loaded at runtime
///
/// Owns the library handle alongside the resolved entry points, so the
/// pointers stay valid for the value's whole lifetime. Dropping the value
/// closes the library.
pub struct DynRenderLibrary {
    api: RenderApi,
    /// Keeps the resolved pointers valid
    _library: Library,
}

impl DynRenderLibrary {
    /// Open the default rendering library and resolve its entry points
    ///
    /// # Errors
    ///
    /// - `LoadFailed` when the library cannot be opened
    /// - `MissingSymbol` when any required export is absent (the handle is
    ///   released before returning)
    pub fn load() -> Result<Self> {
        Self::load_named(RENDERER_LIB_NAME)
    }

    /// Open a rendering library by an alternate logical name
    ///
    /// The platform's shared-library extension is appended; the name is
    /// otherwise passed to the platform loader as-is, so its search path
    /// applies.
    pub fn load_named(name: &str) -> Result<Self> {
        let filename = format!("{}.{}", name, std::env::consts::DLL_EXTENSION);
        bridge_debug!(SOURCE, "Loading rendering library {}", filename);

        // SAFETY: loading a library runs its initialization routines; the
        // rendering library is trusted to the same degree as linking it at
        // build time would be.
        let library = unsafe { Library::new(&filename) }
            .map_err(|error| Error::LoadFailed(error.to_string()))?;

        // Any missing symbol drops `library` here, releasing the handle
        let api = RenderApi::resolve(&library)?;

        bridge_debug!(SOURCE, "Resolved {} symbols from {}", REQUIRED_SYMBOLS.len(), filename);
        Ok(Self {
            api,
            _library: library,
        })
    }

    /// Loader in the shape `GlesBridge::initialize` expects
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gles_bridge::GlesBridge;
    /// use gles_bridge_backend_dynlib::DynRenderLibrary;
    ///
    /// let mut bridge = GlesBridge::new();
    /// bridge.initialize(DynRenderLibrary::boxed_loader())?;
    /// # Ok::<(), gles_bridge::Error>(())
    /// ```
    pub fn boxed_loader() -> impl FnOnce() -> Result<Box<dyn RenderLibrary>> {
        || Ok(Box::new(Self::load()?) as Box<dyn RenderLibrary>)
    }
}

impl RenderLibrary for DynRenderLibrary {
    fn init_library(&self) -> bool {
        // SAFETY: pointer resolved from the live library; no arguments
        unsafe { (self.api.init_library)() != 0 }
    }

    fn init_renderer(&self, width: i32, height: i32, port: i32) -> i32 {
        // SAFETY: pointer resolved from the live library; plain integer
        // arguments matching the exported signature
        unsafe { (self.api.init_renderer)(width, height, port) }
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
        // SAFETY: pointer resolved from the live library; the window value
        // is passed through opaquely, as the library expects
        unsafe { (self.api.create_subwindow)(window.as_ptr(), x, y, width, height, rotation) }
    }

    fn destroy_subwindow(&self) -> i32 {
        // SAFETY: pointer resolved from the live library; no arguments
        unsafe { (self.api.destroy_subwindow)() }
    }

    fn repaint_display(&self) {
        // SAFETY: pointer resolved from the live library; no arguments
        unsafe { (self.api.repaint_display)() }
    }

    fn stop_renderer(&self) {
        // SAFETY: pointer resolved from the live library; no arguments
        unsafe { (self.api.stop_renderer)() }
    }
}

#[cfg(test)]
#[path = "dynlib_render_library_tests.rs"]
mod tests;
