//! # Utility Modules
//!
//! Assorted helpers that do not belong to the text, time or unit families.
//!
//! ## Components
//! - **Collections**: order-insensitive slice comparison, sums, set algebra
//! - **Fs**: recursive directory size
//! - **Stream**: stream ↔ buffer conversion and a timer delay
//! - **Diagnostics**: stack trace path rewriting
//! - **Reflect**: class-vs-function heuristic for script callables

pub mod collections;
pub mod diagnostics;
pub mod fs;
pub mod reflect;
pub mod stream;

// Re-export the common entry points
pub use collections::{intersection, is_diff, is_superset, sum, union, Summand};
pub use diagnostics::{error_message, ErrorReport, StackTrace};
pub use fs::folder_size;
pub use reflect::{is_class, FunctionShape};
pub use stream::{buffer_to_stream, read_to_buffer, sleep, stream_to_buffer, BufferStream};
