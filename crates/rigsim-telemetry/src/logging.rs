//! Structured logging initialization.

use std::path::{Path, PathBuf};

use crate::error::{TelemetryError, TelemetryResult};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging options.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file. `None` writes to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Keeps the background log writer alive. Dropping it flushes pending lines.
#[must_use = "dropping the guard stops the log writer"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

impl std::fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogGuard").finish_non_exhaustive()
    }
}

/// Initialize structured logging.
///
/// Uses JSON output when `RUST_ENV=production` and a plain text format
/// otherwise. The returned guard must be held for the life of the process.
pub fn init_logging(options: &LogOptions) -> TelemetryResult<LogGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&options.level))
        .map_err(|e| TelemetryError::LoggingInit(format!("invalid filter: {e}")))?;

    let is_production = std::env::var("RUST_ENV")
        .map(|v| v == "production")
        .unwrap_or(false);

    let (writer, worker) = match &options.file {
        Some(path) => tracing_appender::non_blocking(file_appender(path)?),
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let result = if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(writer),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_ansi(false)
                    .with_writer(writer),
            )
            .try_init()
    };
    result.map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;

    Ok(LogGuard { _worker: worker })
}

/// Build a non-rotating appender, creating the parent directory if needed.
fn file_appender(path: &Path) -> TelemetryResult<RollingFileAppender> {
    let file_name = path.file_name().ok_or_else(|| {
        TelemetryError::LoggingInit(format!("log path has no file name: {}", path.display()))
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(|e| TelemetryError::LoggingInit(format!("cannot open log file: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LogOptions::default();
        assert_eq!(options.level, "info");
        assert!(options.file.is_none());
    }

    #[test]
    fn test_file_appender_rejects_directory_path() {
        let err = file_appender(Path::new("/")).unwrap_err();
        assert!(matches!(err, TelemetryError::LoggingInit(_)));
    }

    #[test]
    fn test_file_appender_creates_parent() {
        let dir = std::env::temp_dir().join(format!("rigsim-log-test-{}", std::process::id()));
        let path = dir.join("nested").join("rigsim.log");
        assert!(file_appender(&path).is_ok());
        assert!(dir.join("nested").is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
