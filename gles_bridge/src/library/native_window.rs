/// NativeWindow - opaque host window handle passed through to the library

use std::ffi::c_void;

use raw_window_handle::RawWindowHandle;

use crate::error::{Error, Result};

/// Opaque host window handle
///
/// The external rendering library receives the host window as an untyped
/// pointer-sized value: an HWND on Windows, an X11 window id on Linux, an
/// NSView pointer on macOS, an ANativeWindow pointer on Android. This type
/// carries that value without interpreting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeWindow(*mut c_void);

impl NativeWindow {
    /// Wrap a raw platform window handle
    pub fn from_raw(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    /// Convert a `raw-window-handle` window handle
    ///
    /// Supports the platforms the rendering library runs on (Win32, Xlib,
    /// AppKit, Android NDK).
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedWindowHandle` for handle kinds the
    /// library has no representation for (e.g. Wayland surfaces).
    pub fn from_window_handle(handle: RawWindowHandle) -> Result<Self> {
        match handle {
            RawWindowHandle::Win32(h) => Ok(Self(h.hwnd.get() as *mut c_void)),
            // X11 window ids are not pointers; the library receives them
            // stuffed into a pointer-sized value, as SDL does.
            RawWindowHandle::Xlib(h) => Ok(Self(h.window as *mut c_void)),
            RawWindowHandle::AppKit(h) => Ok(Self(h.ns_view.as_ptr())),
            RawWindowHandle::AndroidNdk(h) => Ok(Self(h.a_native_window.as_ptr())),
            other => Err(Error::UnsupportedWindowHandle(format!("{:?}", other))),
        }
    }

    /// The raw pointer-sized value forwarded to the library
    pub fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

#[cfg(test)]
#[path = "native_window_tests.rs"]
mod tests;
