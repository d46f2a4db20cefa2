//! Logging initialization.
//!
//! The terminal is owned by the TUI, so logs go to
//! `<log dir>/evreg-{datetime}.log` or nowhere at all.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Keeps the log writer alive; dropping it flushes buffered lines.
pub struct LoggingHandle {
    pub _guard: Option<WorkerGuard>,
    /// Path of the log file, if file logging is enabled.
    pub log_file_path: Option<PathBuf>,
}

/// Returns the file name for a log started at `now`.
pub fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("evreg-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Builds the filter: `RUST_LOG` wins, then `--debug`, then the configured level.
fn env_filter(config: &Config, debug_override: bool) -> EnvFilter {
    let level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(level))
}

/// Installs the global subscriber.
///
/// Must be called at most once per process.
#[mutants::skip]
pub fn init_logging(config: &Config, debug_override: bool) -> Result<LoggingHandle> {
    if !config.logging.to_file {
        return Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        });
    }

    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let log_filename = log_file_name(chrono::Utc::now());
    let log_file_path = logs_dir.join(&log_filename);

    let (non_blocking, guard) = file_writer(&logs_dir, &log_filename);

    tracing_subscriber::registry()
        .with(env_filter(config, debug_override))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LoggingHandle {
        _guard: Some(guard),
        log_file_path: Some(log_file_path),
    })
}

fn file_writer(dir: &Path, name: &str) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::never(dir, name);
    tracing_appender::non_blocking(file_appender)
}
