//! Structured logging setup.
//!
//! Installs a global `tracing` subscriber driven by [`LoggingConfig`]. The
//! `RUST_LOG` environment variable wins over the configured level.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{constants, Result, UtilsError};

/// Build the filter: `RUST_LOG` if set and valid, otherwise the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()))
}

/// Install the global subscriber.
///
/// Fails with [`UtilsError::LoggingError`] when a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));
    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| {
        UtilsError::LoggingError(format!("{}: {e}", constants::ERR_SUBSCRIBER_INSTALLED))
    })?;
    info!(app = %config.app_name, level = %config.log_level, "Logging initialised");
    Ok(())
}
