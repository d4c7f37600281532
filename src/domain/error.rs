//! Error types for the forecourt core.
//!
//! This module defines the centralized error type [`ForecourtError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for forecourt operations.
///
/// This enum consolidates the error conditions that can occur in the core:
/// persistence failures, I/O failures, and configuration problems. The domain
/// itself is deliberately error-light: not-found mutations are silent no-ops
/// and malformed persisted state decays to defaults, so neither of those
/// conditions appears here.
///
/// # Examples
///
/// ```
/// use forecourt::domain::ForecourtError;
///
/// fn validate_config() -> Result<(), ForecourtError> {
///     Err(ForecourtError::Config("missing data directory".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ForecourtError {
    /// Persistence operation failed.
    ///
    /// Occurs when writing to the key-value store fails. Reads never produce
    /// this for malformed content; corrupt data is treated as absent.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be read or parsed. The string
    /// describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for forecourt operations.
///
/// This is a type alias for `std::result::Result<T, ForecourtError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ForecourtError>;
