//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` formatter for binaries and test harnesses
//! that embed this crate. `RUST_LOG` takes precedence over the configured
//! level.

use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()))
}

/// Install the global subscriber.
///
/// # Errors
/// [`Error::ConfigError`] if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config);

    let installed = if config.json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };

    installed.map_err(|e| Error::ConfigError(format!("Failed to initialize logging: {e}")))?;
    info!(app = %config.app_name, level = %config.log_level, "logging initialized");
    Ok(())
}
