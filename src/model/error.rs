//! Error types for the cellgrid application boundary.
//!
//! The grid core itself never returns errors: contract violations panic and
//! expected absences (empty grid, point outside any cell) are `None`.
//! Recoverable failures only happen where the crate touches the outside
//! world (config files, log files, stdout), and they are collected here.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the CLI
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber/log file setup failures
//!   - `std::io::Error` - Writing the rendered frame failed

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error.
///
/// Domain errors convert via `From`, so the CLI composes with `?`.
///
/// # Examples
///
/// ```
/// use cellgrid::config::ConfigError;
/// use cellgrid::model::error::AppError;
///
/// fn load() -> Result<(), AppError> {
///     Err(ConfigError::InvalidPath("bad".to_string()))?
/// }
///
/// let err = load().unwrap_err();
/// assert!(err.to_string().contains("bad"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    ///
    /// A missing config file is not an error; this only fires when a file
    /// exists but cannot be read or is not valid TOML.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
