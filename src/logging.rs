//! Tracing subscriber setup
//!
//! Logs go to stderr so command output on stdout stays machine readable.
//! `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::VerbosityLevel;
use crate::config::{Config, ConfigError, Result};

/// Level used when `RUST_LOG` is unset; `-v` and `-q` override the configured one.
pub fn log_level(config: &Config) -> &str {
    match config.verbosity() {
        VerbosityLevel::Verbose => "debug",
        VerbosityLevel::Quiet => "error",
        VerbosityLevel::Normal => config.logging.level.as_str(),
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop and must outlive logging.
pub fn init_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(config)));
    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match &config.logging.file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                ConfigError::Validation(format!(
                    "Log file path has no file name: {}",
                    path.display()
                ))
            })?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            std::fs::create_dir_all(dir)?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking_writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .try_init()?;
            Ok(None)
        }
    }
}
