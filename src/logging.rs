//! File logging for the shell.
//!
//! The terminal belongs to the UI while it runs, so log lines go to a daily
//! rolling file instead of stderr.

use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "tabshell.log";
const DEFAULT_FILTER: &str = "tabshell=info";

/// Keeps the background log writer alive. Drop it to flush.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Pick the log directory and make sure it exists.
///
/// An explicit directory wins; otherwise the user cache directory is tried,
/// then the system temp directory.
pub fn resolve_log_dir(explicit: Option<&Path>) -> io::Result<PathBuf> {
    if let Some(dir) = explicit {
        std::fs::create_dir_all(dir)?;
        return Ok(dir.to_path_buf());
    }

    let preferred = dirs::cache_dir().map(|d| d.join("tabshell").join("logs"));
    if let Some(dir) = preferred {
        if std::fs::create_dir_all(&dir).is_ok() {
            return Ok(dir);
        }
    }

    let dir = std::env::temp_dir().join("tabshell").join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Install the global subscriber. Returns None when logging is unavailable;
/// the shell runs fine without it.
pub fn init(explicit_dir: Option<&Path>) -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir(explicit_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
