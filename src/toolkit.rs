//! Config-bound entry points.
//!
//! The free functions take every parameter explicitly. [`Toolkit`] carries a
//! validated [`UtilsConfig`] and fills in the defaults the host has chosen.

use chrono::{DateTime, TimeZone};
use tracing::debug;

use crate::config::UtilsConfig;
use crate::error::Result;
use crate::text;
use crate::time;
use crate::units;
use crate::utils::diagnostics::{self, StackTrace};

#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    config: UtilsConfig,
}

impl Toolkit {
    /// Validate `config` and bind it.
    pub fn new(config: UtilsConfig) -> Result<Self> {
        config.validate_strict()?;
        debug!(
            random_length = config.defaults.random_length,
            namespace = %config.diagnostics.namespace,
            "Toolkit configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &UtilsConfig {
        &self.config
    }

    /// Random identifier of the configured length.
    pub fn random_string(&self) -> String {
        text::random_string(self.config.defaults.random_length)
    }

    /// Format `date` with the configured format string.
    pub fn format_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        time::format_date(date, &self.config.defaults.date_format)
    }

    /// Render a byte count scaled by the configured base.
    pub fn size(&self, value: f64) -> String {
        units::size(value, self.config.defaults.size_base)
    }

    /// Rewrite stack frames under the configured namespace.
    pub fn error_message<T: StackTrace>(&self, err: T) -> T {
        diagnostics::error_message_in(err, &self.config.diagnostics.namespace)
    }
}
