//! Error types for the GLES bridge
//!
//! This module defines the error types used throughout the bridge,
//! covering library loading, symbol resolution, and forwarded calls.

use std::fmt;

/// Result type for GLES bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// GLES bridge errors
#[derive(Debug, Clone)]
pub enum Error {
    /// The shared rendering library could not be opened
    LoadFailed(String),

    /// A required exported symbol was missing from the loaded library
    MissingSymbol {
        /// Name of the missing export
        symbol: &'static str,
        /// Platform loader's error message
        reason: String,
    },

    /// The library's own initialization entry point reported failure
    InitializationFailed(String),

    /// A forwarding call arrived before a successful initialize
    NotInitialized,

    /// A forwarded call into the library reported failure
    BackendError(String),

    /// A native window handle kind the bridge cannot represent
    UnsupportedWindowHandle(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LoadFailed(msg) => {
                write!(f, "Could not load GLES emulation library: {}", msg)
            }
            Error::MissingSymbol { symbol, reason } => {
                write!(f, "Could not find required symbol ({}): {}", symbol, reason)
            }
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::NotInitialized => write!(f, "GLES emulation is not initialized"),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::UnsupportedWindowHandle(msg) => {
                write!(f, "Unsupported window handle: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
