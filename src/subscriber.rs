//! tracing-subscriber setup
//!
//! Installs the subscriber stack behind the default [`TracingSink`]: a
//! console layer, and an optional JSON rolling-file layer. Call once at
//! process startup and keep the returned guard alive.
//!
//! [`TracingSink`]: crate::logger::sink::TracingSink

use crate::config::LoggingConfig;
use crate::domain::errors::CloakError;
use crate::domain::level::Level;
use crate::domain::result::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Guard that must be kept alive for the duration of the program so
/// buffered file output is flushed on shutdown.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Initialize the global subscriber from configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the log directory
/// cannot be created, or a subscriber is already installed.
///
/// # Examples
///
/// ```no_run
/// use cloak::config::LoggingConfig;
/// use cloak::subscriber::init_logging;
///
/// let config = LoggingConfig::default();
/// let _guard = init_logging(&config).expect("Failed to initialize logging");
/// ```
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    config.validate()?;
    let min_level = config.min_level()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cloak={}", tracing_level(min_level))));

    let mut layers = Vec::new();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter.clone());
    layers.push(console_layer.boxed());

    let file_guard = if config.file_enabled {
        let rotation = match config.file_rotation.as_str() {
            "hourly" => Rotation::HOURLY,
            _ => Rotation::DAILY,
        };

        std::fs::create_dir_all(&config.file_path).map_err(|e| {
            CloakError::Configuration(format!(
                "Failed to create log directory {}: {}",
                config.file_path, e
            ))
        })?;

        let file_appender = RollingFileAppender::new(rotation, &config.file_path, "cloak.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_filter(env_filter);

        layers.push(file_layer.boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| CloakError::Configuration(format!("Failed to install subscriber: {e}")))?;

    tracing::info!(
        file_enabled = config.file_enabled,
        file_path = %config.file_path,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

fn tracing_level(level: Level) -> tracing::Level {
    match level {
        Level::Debug => tracing::Level::DEBUG,
        Level::Info => tracing::Level::INFO,
        Level::Warn => tracing::Level::WARN,
        Level::Error => tracing::Level::ERROR,
    }
}
