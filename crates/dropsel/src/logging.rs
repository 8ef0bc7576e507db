//! File logging for dropsel programs.
//!
//! The terminal UI owns the screen, so `tracing` output goes to a file. The
//! filter comes from `DROPSEL_LOG` (same syntax as `RUST_LOG`) and defaults
//! to `info`.

use dropsel_core::runtime::log_to_file;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DROPSEL_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("a global logger is already installed: {0}")]
    Install(String),
}

/// Install a global `tracing` subscriber appending to `path`.
pub fn init_file_logging(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    let file = log_to_file(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
