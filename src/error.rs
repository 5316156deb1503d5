//! # Error Types
//!
//! Error handling for the utility helpers.
//!
//! Most helpers in this crate are infallible and return a best-effort value.
//! The ones that can fail report through [`UtilsError`]:
//!
//! ## Error Categories
//! - **I/O Errors**: filesystem walks and stream consumption
//! - **Parse Errors**: malformed time or memory quantity strings
//! - **Timestamp Errors**: dates that cannot be turned into an identifier
//! - **Configuration / Logging Errors**: bad config files, subscriber setup
//!
//! ## Example Usage
//! ```rust
//! use hydro_utils::error::{Result, UtilsError};
//! use hydro_utils::units::parse_time_ms;
//! use tracing::{error, info};
//!
//! fn timeout_from_env(raw: &str) -> Result<u64> {
//!     parse_time_ms(raw)
//! }
//!
//! match timeout_from_env("15s") {
//!     Ok(ms) => info!(ms, "Parsed timeout"),
//!     Err(e @ UtilsError::TimeParse(_)) => error!(error = %e, "Bad timeout"),
//!     Err(e) => error!(error = %e, "Unexpected failure"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants shared by the error variants and log lines.
pub mod constants {
    /// Suffix appended to a time string that failed to parse
    pub const ERR_PARSE_TIME: &str = "error parsing time";
    /// Suffix appended to a memory string that failed to parse
    pub const ERR_PARSE_MEMORY: &str = "error parsing memory";

    /// Timestamp conversion errors
    pub const ERR_UNPARSEABLE_DATE: &str = "Unparseable date string";
    pub const ERR_TIMESTAMP_RANGE: &str = "Timestamp outside the 32-bit epoch-seconds range";

    /// Logging setup errors
    pub const ERR_SUBSCRIBER_INSTALLED: &str = "A global tracing subscriber is already installed";
}

// UtilsError is the error type for every fallible helper in the crate
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum UtilsError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("{0} error parsing time")]
    TimeParse(String),

    #[error("{0} error parsing memory")]
    MemoryParse(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

/// Type alias for Results using UtilsError
pub type Result<T> = std::result::Result<T, UtilsError>;
