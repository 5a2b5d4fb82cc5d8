//! File-based logging setup.
//!
//! The TUI owns stdout and the alternate screen, so log output goes to
//! ${KALQ_HOME}/logs/kalq.log instead. One-shot subcommands skip this
//! entirely and stay silent.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the global subscriber writing to the kalq log file.
///
/// `fallback_filter` is the config's `log_filter`; the KALQ_LOG
/// environment variable takes precedence. The returned guard must be held
/// for the life of the process so buffered lines are flushed on exit.
pub fn init_file_logging(fallback_filter: &str) -> Result<WorkerGuard> {
    let dir = paths::log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, "kalq.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("KALQ_LOG")
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized");
    Ok(guard)
}
