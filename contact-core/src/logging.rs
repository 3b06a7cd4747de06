//! Logging setup.
//!
//! Built on the `tracing` ecosystem: a stdout layer plus an optional daily
//! rolling file layer, each in text or JSON format.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
    Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the non-blocking file writer alive so buffered lines get flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup writing to `stderr`.
///
/// Intended for tests and early startup before the configuration is loaded.
/// Honors `RUST_LOG`, defaulting to `info`. Errors (e.g. a subscriber is
/// already installed) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Creates a daily rolling file layer, creating the parent directory if needed.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    utils::fs::ensure_dir_exists(directory)?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("contact.log"));
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: BoxedLayer = match format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
        _ => fmt::layer()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
    };
    Ok((layer, guard))
}

fn level_directive(level: &str) -> Result<String, CoreError> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        invalid_level => {
            return Err(CoreError::Logging(LoggingError::InitializationFailure(format!(
                "Invalid log level in config: {}",
                invalid_level
            ))));
        }
    };
    Ok(level.to_string())
}

/// Initializes the global logging system from a [`LoggingConfig`].
///
/// With `is_reload` set, a failure to replace an already installed subscriber
/// is reported on stderr instead of returned.
///
/// # Errors
///
/// Returns [`CoreError::Logging`] for an invalid level or when the global
/// subscriber cannot be installed on initial setup, and
/// [`CoreError::Filesystem`] when the log directory cannot be created.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let directive = level_directive(&config.level)?;

    let stdout_filter = EnvFilter::new(&directive);
    let stdout_layer: BoxedLayer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        new_file_guard = Some(guard);
        layers.push(file_layer.with_filter(EnvFilter::new(&directive)).boxed());
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut guard_slot) => {
            // Dropping the previous guard flushes the old file writer.
            *guard_slot = new_file_guard;
        }
        Err(e) => {
            eprintln!("[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.", e);
        }
    }

    match result {
        Ok(()) => {
            tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
            Ok(())
        }
        Err(e) if is_reload => {
            eprintln!("[INFO] Logging re-initialization attempted; previous subscriber remains active: {}", e);
            Ok(())
        }
        Err(e) => Err(CoreError::Logging(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_init_minimal_logging_runs_twice_without_panic() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("minimal logging active");
    }

    #[rstest]
    #[case("text")]
    #[case("json")]
    fn test_create_file_layer_creates_parent(#[case] format: &str) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("nested/contact.log");

        let result = create_file_layer(&log_path, format);
        assert!(result.is_ok(), "create_file_layer failed: {:?}", result.err());
        assert!(log_path.parent().unwrap().is_dir());
    }

    #[rstest]
    #[case("TRACE", "trace")]
    #[case("Warn", "warn")]
    #[case("error", "error")]
    fn test_level_directive_accepts_known_levels(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(level_directive(raw).unwrap().to_lowercase(), expected);
    }

    #[test]
    fn test_init_logging_invalid_level_returns_error() {
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        match init_logging(&config, false) {
            Err(CoreError::Logging(LoggingError::InitializationFailure(msg))) => {
                assert!(msg.contains("Invalid log level in config: supertrace"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_init_logging_reload_keeps_file_guard() {
        let temp_dir = TempDir::new().unwrap();
        let config = LoggingConfig {
            level: "debug".to_string(),
            file_path: Some(temp_dir.path().join("reload.log")),
            format: "json".to_string(),
        };

        // A reload never fails just because another test installed a subscriber first.
        init_logging(&config, true).expect("reload with file output failed");
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_some());

        let console_only = LoggingConfig { file_path: None, ..config };
        init_logging(&console_only, true).expect("reload without file output failed");
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_none());
    }
}
