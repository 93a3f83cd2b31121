//! Error types for the engine's ambient layers.
//!
//! The two entry points themselves are total and never fail. Errors only
//! arise while decoding arguments at the C boundary and while loading
//! configuration from the environment or a `.env` file.

use thiserror::Error;

/// Crate-wide `Result` alias with [`EngineError`] as the default error.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// Engine error hierarchy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A null symbol pointer was passed across the C boundary
    #[error("symbol pointer is null")]
    NullSymbol,

    /// A configuration value could not be parsed
    #[error("invalid config {key}={value:?}: {reason}")]
    InvalidConfig {
        /// Environment key that was read
        key: &'static str,
        /// Raw value found
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A `.env` file could not be read or parsed
    #[error("failed to load env file {path}: {reason}")]
    EnvFile {
        /// Path of the file
        path: String,
        /// Underlying dotenvy error
        reason: String,
    },
}
