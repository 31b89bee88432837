use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log level {0:?}")]
    Filter(String),
    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Build the filter from a directive such as "debug" or "taskit=trace".
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|_| LoggingError::Filter(level.to_string()))
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::Open {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Route tracing events to `path`, appending. The terminal belongs to the
/// TUI, so without a file nothing is logged.
pub fn init_logging(path: Option<&Path>, level: &str) -> Result<(), LoggingError> {
    let Some(path) = path else {
        return Ok(());
    };
    let filter = build_filter(level)?;
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "taskit starting");
    Ok(())
}
