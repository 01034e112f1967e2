//! File-based logging setup.
//!
//! Logs go to `${AUTHTOUR_HOME}/logs/authtour.log` rather than stderr so the
//! TUI's alternate screen is never corrupted. The filter comes from the
//! `AUTHTOUR_LOG` environment variable (default: info).

use anyhow::{Context, Result};
use authtour_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "AUTHTOUR_LOG";

/// Initializes the global tracing subscriber.
///
/// The returned guard must be held for the process lifetime; dropping it
/// flushes and stops the background writer.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(&logs_dir, "authtour.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
