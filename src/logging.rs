//! File logging for the TUI binary
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// `info` unless `directives` (normally `RUST_LOG`) says otherwise.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// A single never-rotated log file, directory created on demand.
pub fn file_appender(dir: &Path, file_name: &str) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("failed to open log file {}", dir.join(file_name).display()))
}

/// Installs the global subscriber. Keep the guard alive until the UI is gone,
/// dropping it flushes whatever is still queued.
pub fn init(dir: &Path, file_name: &str) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(dir, file_name)?);

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("Log file: {}", dir.join(file_name).display());
    Ok(guard)
}
