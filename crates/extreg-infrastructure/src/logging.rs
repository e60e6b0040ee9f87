//! Structured logging with tracing
//!
//! Configures a `tracing-subscriber` registry with an environment filter,
//! plain or JSON output and an optional daily rolling log file.

use std::path::Path;

use extreg_domain::error::{Error, Result};
use tracing::{Level, debug, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;

/// Initialize logging with the provided configuration
///
/// `EXTREG_LOG` overrides the configured level with a full filter
/// directive. Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config
        .file_output
        .as_deref()
        .map(|path| file_appender(path, config.max_files))
        .transpose()?;

    // Layer types differ per format, hence the separate branches
    let registry = Registry::default().with(filter);
    let result = if config.json_format {
        let stderr = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stderr).with(file).try_init()
    } else {
        let stderr = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stderr).with(file).try_init()
    };
    result.context("Failed to install the global tracing subscriber")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

fn file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_STEM);

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(max_files)
        .build(directory)
        .context(format!("Failed to open log file in {}", directory.display()))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

/// Log one discovery source being added to the loader
pub fn log_discovery_source(kind: &str, location: &str) {
    debug!(kind, location, "Discovery source registered");
}
