//! Tracing subscriber initialization.
//!
//! Logs go to a file so they never interleave with the rendered grid on
//! stdout. Follow them with `tail -f` in a separate terminal.
//!
//! The viewport cache emits under [`CACHE_TARGET`]: one `debug` event per
//! frame rebuild (reused, created and dropped item counts) and one `trace`
//! event per fast-path translation. [`filter`] raises that target on its own
//! so rebuilds can be watched without the rest of the crate's output.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Target prefix of the viewport cache's events.
pub const CACHE_TARGET: &str = "cellgrid::cache";

/// Directives used when neither `RUST_LOG` nor the config sets any.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Filter directives could not be parsed
    #[error("Invalid log filter {directives:?}: {reason}")]
    InvalidFilter {
        /// The rejected directives
        directives: String,
        /// Parser message
        reason: String,
    },

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Build the event filter.
///
/// `RUST_LOG` wins over `directives` when set. `cache_level` (e.g. `"debug"`)
/// is applied last to [`CACHE_TARGET`] only.
///
/// # Errors
///
/// Fails if `directives` or `cache_level` does not parse.
pub fn filter(directives: &str, cache_level: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(from_env.as_deref(), directives, cache_level)
}

fn build_filter(
    from_env: Option<&str>,
    directives: &str,
    cache_level: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    let base = from_env.unwrap_or(directives);
    let filter = EnvFilter::try_new(base).map_err(|err| LoggingError::InvalidFilter {
        directives: base.to_string(),
        reason: err.to_string(),
    })?;

    let Some(level) = cache_level else {
        return Ok(filter);
    };
    let cache = format!("{}={}", CACHE_TARGET, level);
    let directive = cache
        .parse::<Directive>()
        .map_err(|err| LoggingError::InvalidFilter {
            directives: cache.clone(),
            reason: err.to_string(),
        })?;
    Ok(filter.add_directive(directive))
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Creates the log directory if it doesn't exist.
///
/// # Errors
///
/// Fails if the path has no file name, the directory cannot be created, or
/// a global subscriber is already installed.
pub fn init(log_path: &Path, filter: EnvFilter) -> Result<(), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
