//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILE_PREFIX: &str = "quantdeck.log";

/// Info for our own crates, warn for dependencies
const DEFAULT_FILTER: &str =
    "quantdeck=info,quantdeck_app=info,quantdeck_content=info,quantdeck_tui=info,warn";

/// Keeps the background log writer alive; dropping it flushes pending lines
pub struct LogGuard {
    _worker: WorkerGuard,
    directory: PathBuf,
}

impl LogGuard {
    /// Directory holding the daily log files
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Initialize the logging subsystem
///
/// The TUI owns the terminal, so logs go to a daily rolling file under
/// `~/.local/share/quantdeck/logs/`. Log level is controlled by the
/// `QUANTDECK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// QUANTDECK_LOG=debug quantdeck
/// QUANTDECK_LOG=quantdeck_app=trace quantdeck
/// ```
pub fn init() -> Result<LogGuard> {
    let directory = log_directory();
    std::fs::create_dir_all(&directory)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &directory, LOG_FILE_PREFIX);
    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter(std::env::var("QUANTDECK_LOG").ok().as_deref()))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::LoggingInit(e.to_string()))?;

    tracing::info!("quantdeck {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", directory.display());

    Ok(LogGuard {
        _worker: worker,
        directory,
    })
}

/// Filter from a `QUANTDECK_LOG` value, falling back to [`DEFAULT_FILTER`]
/// when it is unset or does not parse
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("quantdeck").join("logs")
}
