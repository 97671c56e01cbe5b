//! Logging on top of the `tracing` ecosystem.
//!
//! Events always go to stderr so that stdout carries nothing but results.
//! An optional daily-rolling file layer can be added through
//! [`LoggingConfig::file_path`].

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};

use once_cell::sync::Lazy;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

const DEFAULT_LOG_FILE_NAME: &str = "rectangles.log";

/// Keeps the non-blocking file writer alive so buffered events get flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Stderr-only logging filtered by `RUST_LOG`, defaulting to `warn`.
///
/// Meant for startup, before the configuration is loaded, and as a fallback
/// when it cannot be. Fails silently if a subscriber is already installed.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn parse_level(level: &str) -> Result<Level, CoreError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid => Err(LoggingError::InitializationFailure(format!("Invalid log level in config: {invalid}")).into()),
    }
}

/// An [`EnvFilter`] from a directive such as `warn` or `rectangles_core=debug`.
fn build_filter(directive: &str) -> Result<EnvFilter, CoreError> {
    EnvFilter::try_new(directive)
        .map_err(|e| LoggingError::FilterError(format!("Invalid filter directive '{directive}': {e}")).into())
}

fn create_stderr_layer(format: &str) -> BoxedLayer {
    match format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(std::io::stderr).with_ansi(false).boxed(),
        _ => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .boxed(),
    }
}

/// A daily-rolling, non-blocking file layer and the guard flushing it.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !directory.exists() {
        fs::create_dir_all(directory).map_err(|source| CoreError::Filesystem {
            message: "Failed to create log directory".to_string(),
            path: directory.to_path_buf(),
            source,
        })?;
    }
    let file_name = log_path.file_name().unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_NAME));

    let appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(writer).with_ansi(false).boxed(),
        _ => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload` set, an already installed subscriber is not an error; the
/// previous one stays in effect.
///
/// # Errors
///
/// [`LoggingError::InitializationFailure`] for an unknown level or when a
/// subscriber is already installed and `is_reload` is false;
/// [`LoggingError::FilterError`] if the level filter cannot be built;
/// [`CoreError::Filesystem`] if the log directory cannot be created.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?;
    let directive = level.to_string();

    let mut layers: Vec<BoxedLayer> = vec![create_stderr_layer(&config.format)
        .with_filter(build_filter(&directive)?)
        .boxed()];

    let mut file_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(build_filter(&directive)?).boxed());
        file_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();

    // The previous guard belongs to whichever subscriber is still installed.
    if result.is_ok() {
        match LOG_WORKER_GUARD.lock() {
            Ok(mut slot) => *slot = file_guard,
            Err(e) => eprintln!("[ERROR] Failed to store the log file guard: {e}. Log flushing may be affected."),
        }
    }

    match result {
        Ok(()) => {
            tracing::debug!(level = %level, file = ?config.file_path, "logging initialized");
            Ok(())
        }
        Err(e) if is_reload => {
            tracing::debug!("logging already initialized, keeping the existing subscriber: {e}");
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {e}"
        ))
        .into()),
    }
}
