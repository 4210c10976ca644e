//! Error types for the Seascape engine
//!
//! This module defines the error types used throughout the engine,
//! including asset loading, configuration, and host (renderer/window) failures.

use std::fmt;

/// Result type for Seascape engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Seascape engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Host-side error (renderer, window, event loop)
    BackendError(String),

    /// Invalid resource (descriptor, node key, task key)
    InvalidResource(String),

    /// Initialization failed (engine, app, subsystems)
    InitializationFailed(String),

    /// Asset could not be fetched (missing file, I/O error)
    LoadFailed(String),

    /// Asset was fetched but could not be decoded
    DecodeFailed(String),

    /// No decoder or back end handles this source
    UnsupportedFormat(String),

    /// Asset load exceeded its bounded wait
    TimedOut(String),

    /// Pending load was aborted by the caller
    Cancelled(String),

    /// Scene configuration is malformed or inconsistent
    ConfigError(String),
}

impl Error {
    /// Whether this error ends a placement task (as opposed to a caller mistake).
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Error::LoadFailed(_)
                | Error::DecodeFailed(_)
                | Error::UnsupportedFormat(_)
                | Error::TimedOut(_)
                | Error::Cancelled(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::LoadFailed(msg) => write!(f, "Load failed: {}", msg),
            Error::DecodeFailed(msg) => write!(f, "Decode failed: {}", msg),
            Error::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            Error::TimedOut(msg) => write!(f, "Timed out: {}", msg),
            Error::Cancelled(msg) => write!(f, "Cancelled: {}", msg),
            Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
