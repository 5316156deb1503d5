//! # hydro-utils
//!
//! Small, stateless helpers shared by the Hydro services: template
//! formatting, case conversion, time and memory quantity parsing, byte-size
//! rendering, stream buffering and a handful of diagnostics utilities.
//!
//! Every helper is a free function. [`toolkit::Toolkit`] binds a
//! [`config::UtilsConfig`] for callers that want configured defaults.
//!
//! ## Modules
//! - [`text`]: `{0}` / `{name}` templates, random strings, deep case conversion
//! - [`time`]: millisecond constants, short durations, date formatting, ObjectIds
//! - [`units`]: `"500ms"` / `"2gb"` parsing and `KiB`/`MiB` rendering
//! - [`utils`]: collections, folder size, streams, stack traces, class heuristic
//! - [`config`], [`logging`], [`error`]: ambient setup
//!
//! ## Example
//! ```rust
//! use hydro_utils::{text, time, units};
//! use serde_json::json;
//!
//! assert_eq!(text::format("{0}-{1}", &[json!("a"), json!("b")]), "a-b");
//! assert_eq!(units::parse_time_ms("2s").unwrap(), 2000);
//! assert_eq!(units::size(1536.0, 1.0), "1.5 KiB");
//! assert_eq!(time::format_seconds("3661"), "01:01:01");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod text;
pub mod time;
pub mod toolkit;
pub mod units;
pub mod utils;

pub use error::{Result, UtilsError};
pub use toolkit::Toolkit;
