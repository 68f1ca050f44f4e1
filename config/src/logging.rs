//! Process-wide tracing subscriber for the govschemes binaries.
//!
//! stderr always; a daily rolling file too when a log directory is given. Level filter
//! comes from `RUST_LOG`, default `info`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Directory for rolling log files; unset or empty means stderr only.
pub const LOG_DIR_ENV: &str = "GOVSCHEMES_LOG_DIR";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("create log dir {path}: {source}")]
    LogDir {
        path: String,
        source: std::io::Error,
    },
    #[error("install tracing subscriber: {0}")]
    Install(String),
}

/// [`init_tracing_in`] with the directory taken from `GOVSCHEMES_LOG_DIR`.
pub fn init_tracing(file_prefix: &str) -> Result<Option<WorkerGuard>, LoggingError> {
    let dir = std::env::var_os(LOG_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    init_tracing_in(dir.as_deref(), file_prefix)
}

/// Installs the global subscriber. Files are named `<file_prefix>.log.<date>`.
///
/// Keep the returned guard alive until exit; dropping it flushes and stops the file writer.
pub fn init_tracing_in(
    log_dir: Option<&Path>,
    file_prefix: &str,
) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|source| LoggingError::LogDir {
                path: dir.display().to_string(),
                source,
            })?;
            let appender = tracing_appender::rolling::daily(dir, format!("{}.log", file_prefix));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;
    Ok(guard)
}
