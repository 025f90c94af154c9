use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use time::UtcOffset;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{self, EnvFilter, fmt, prelude::*};

use crate::error::ServerError;

const LOG_RETENTION_DAYS: u64 = 7;

/// Get the log directory path in the user-specific OS cache directory
/// - Linux: ~/.cache/aymara-language-server/
/// - macOS: ~/Library/Caches/aymara-language-server/
/// - Windows: %LOCALAPPDATA%\aymara-language-server\
fn get_log_dir() -> Result<PathBuf, ServerError> {
    let log_dir = dirs::cache_dir()
        .ok_or(ServerError::NoCacheDir)?
        .join("aymara-language-server");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}

fn is_session_log(name: &str) -> bool {
    name.starts_with("session-") && name.ends_with(".log")
}

/// Remove session logs older than LOG_RETENTION_DAYS
fn cleanup_old_logs(log_dir: &Path) {
    let now = SystemTime::now();
    let retention = Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);

    let Ok(entries) = fs::read_dir(log_dir) else { return };
    for entry in entries.flatten() {
        let Ok(metadata) = entry.metadata() else { continue };
        if !metadata.is_file() {
            continue;
        }
        let stale = entry.file_name().to_str().is_some_and(is_session_log)
            && metadata
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .is_some_and(|age| age > retention);
        if stale {
            if let Err(e) = fs::remove_file(entry.path()) {
                eprintln!("Failed to remove old log file {:?}: {}", entry.path(), e);
            }
        }
    }
}

/// stderr filter: `--log-level` if given, else RUST_LOG, else "info"
fn stderr_filter(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Initialize logging to stderr and, optionally, to a session file.
///
/// Returns a `WorkerGuard` that must be kept alive for the duration of the
/// program so buffered file output is flushed. stdout is never written to:
/// it carries the LSP transport.
///
/// # Arguments
/// * `no_color` - Disable ANSI colors in stderr output
/// * `log_level` - Override log level (otherwise uses RUST_LOG or defaults to "info")
/// * `enable_file_logging` - Also log at DEBUG level to the OS cache directory (disable for tests)
pub fn init_logger(
    no_color: bool,
    log_level: Option<&str>,
    enable_file_logging: bool,
) -> Result<WorkerGuard, ServerError> {
    let timer = fmt::time::OffsetTime::new(
        UtcOffset::UTC,
        format_description!("[[[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z]"),
    );

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(timer.clone())
        .with_ansi(!no_color)
        .with_filter(stderr_filter(log_level));

    if !enable_file_logging {
        let (_, guard) = tracing_appender::non_blocking(std::io::sink());
        let result = tracing_subscriber::registry().with(stderr_layer).try_init();
        return accept_existing_subscriber(result).map(|()| guard);
    }

    let log_dir = get_log_dir()?;
    cleanup_old_logs(&log_dir);

    let timestamp = time::OffsetDateTime::now_utc()
        .format(format_description!("[year][month][day]-[hour][minute][second]"))?;
    let log_path = log_dir.join(format!("session-{}-{}.log", timestamp, std::process::id()));

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_timer(timer)
        .with_ansi(false)
        .with_filter(EnvFilter::new("debug"));

    let result = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    accept_existing_subscriber(result)?;

    eprintln!("Logging to file: {:?}", log_path);
    Ok(guard)
}

/// A subscriber installed earlier (e.g. by another test) is not an error.
fn accept_existing_subscriber(
    result: Result<(), tracing_subscriber::util::TryInitError>,
) -> Result<(), ServerError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            let message = e.to_string();
            if message.contains("already been set") || message.contains("SetLoggerError") {
                Ok(())
            } else {
                Err(ServerError::Subscriber(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_log_names() {
        assert!(is_session_log("session-20260101-120000-42.log"));
        assert!(!is_session_log("wire-20260101-120000-42.log"));
        assert!(!is_session_log("session-notes.txt"));
    }

    #[test]
    fn test_init_logger_twice_without_file() {
        assert!(init_logger(true, Some("warn"), false).is_ok());
        assert!(init_logger(true, Some("warn"), false).is_ok());
    }
}
