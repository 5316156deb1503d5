//! # Configuration Management
//!
//! Defaults applied by [`Toolkit`](crate::toolkit::Toolkit) and the logging setup.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()` (`HYDRO_UTILS_*`)

use crate::error::{Result, UtilsError};
use crate::text::DEFAULT_RANDOM_LENGTH;
use crate::time::DEFAULT_DATE_FORMAT;
use crate::utils::diagnostics::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Longest random identifier the toolkit will generate by default
pub const MAX_RANDOM_LENGTH: usize = 4096;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct UtilsConfig {
    /// Defaults for formatting and generation helpers
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Stack trace rewriting
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl UtilsConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| UtilsError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| UtilsError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| UtilsError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(len) = std::env::var("HYDRO_UTILS_RANDOM_LENGTH") {
            config.defaults.random_length = len.parse::<usize>().map_err(|e| {
                UtilsError::ConfigError(format!("Invalid HYDRO_UTILS_RANDOM_LENGTH: {e}"))
            })?;
        }

        if let Ok(fmt) = std::env::var("HYDRO_UTILS_DATE_FORMAT") {
            config.defaults.date_format = fmt;
        }

        if let Ok(base) = std::env::var("HYDRO_UTILS_SIZE_BASE") {
            if let Ok(val) = base.parse::<f64>() {
                config.defaults.size_base = val;
            }
        }

        if let Ok(ns) = std::env::var("HYDRO_UTILS_STACK_NAMESPACE") {
            config.diagnostics.namespace = ns;
        }

        if let Ok(level) = std::env::var("HYDRO_UTILS_LOG_LEVEL") {
            config.logging.log_level = level.parse::<Level>().map_err(|_| {
                UtilsError::ConfigError(format!("Invalid HYDRO_UTILS_LOG_LEVEL: {level}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| UtilsError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| UtilsError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.defaults.validate());
        errors.extend(self.diagnostics.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(UtilsError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Defaults for helpers that take an optional argument
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Length of generated random strings
    pub random_length: usize,

    /// Format string used when none is given
    pub date_format: String,

    /// Multiplier applied to byte counts before rendering
    pub size_base: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            random_length: DEFAULT_RANDOM_LENGTH,
            date_format: String::from(DEFAULT_DATE_FORMAT),
            size_base: 1.0,
        }
    }
}

impl DefaultsConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.random_length == 0 {
            errors.push("Random length must be greater than 0".to_string());
        } else if self.random_length > MAX_RANDOM_LENGTH {
            errors.push(format!(
                "Random length too large: {} (maximum: {MAX_RANDOM_LENGTH})",
                self.random_length
            ));
        }

        if self.date_format.is_empty() {
            errors.push("Date format cannot be empty".to_string());
        }

        if !self.size_base.is_finite() || self.size_base <= 0.0 {
            errors.push(format!(
                "Size base must be a positive number, got {}",
                self.size_base
            ));
        }

        errors
    }
}

/// Stack trace rewriting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    /// Directory name whose install prefix is trimmed from frames
    pub namespace: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            namespace: String::from(DEFAULT_NAMESPACE),
        }
    }
}

impl DiagnosticsConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.namespace.is_empty() {
            errors.push("Stack namespace cannot be empty".to_string());
        } else if self.namespace.contains(['/', '\\']) {
            errors.push(format!(
                "Stack namespace must be a single directory name: '{}'",
                self.namespace
            ));
        }
        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level used when `RUST_LOG` is unset
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("hydro-utils"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
