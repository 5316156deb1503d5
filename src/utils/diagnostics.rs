//! Stack trace path rewriting.
//!
//! Deployed services run from deep install prefixes
//! (`/srv/app/node_modules/@hydrooj/utils/...`). Frames under the project
//! namespace are trimmed down to the part after it so traces stay readable in
//! logs and user-facing error pages.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// Namespace directory whose prefix is stripped from frame paths
pub const DEFAULT_NAMESPACE: &str = "hydrooj";

/// A value that carries a stack trace which can be rewritten in place.
pub trait StackTrace: Sized {
    fn stack(&self) -> &str;
    fn with_stack(self, stack: String) -> Self;
}

impl StackTrace for String {
    fn stack(&self) -> &str {
        self
    }

    fn with_stack(self, stack: String) -> Self {
        stack
    }
}

/// Captured error message plus the trace it was raised with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    pub stack: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: stack.into(),
        }
    }

    /// Record `err` with a backtrace of the current thread.
    pub fn capture(err: &dyn Error) -> Self {
        Self::new(err.to_string(), Backtrace::force_capture().to_string())
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.message, self.stack)
    }
}

impl StackTrace for ErrorReport {
    fn stack(&self) -> &str {
        &self.stack
    }

    fn with_stack(mut self, stack: String) -> Self {
        self.stack = stack;
        self
    }
}

/// Segment between the first and second occurrence of `pat`.
fn second_piece<'a>(line: &'a str, pat: &str) -> &'a str {
    line.split(pat).nth(1).unwrap_or_default()
}

fn rewrite_line(line: &str, namespace: &str) -> String {
    let trimmed = line.trim_start();
    if !trimmed.starts_with("at ") {
        return line.to_string();
    }
    let scoped = format!("@{namespace}{MAIN_SEPARATOR}");
    let plain = format!("{namespace}{MAIN_SEPARATOR}");
    if line.contains(&format!("{MAIN_SEPARATOR}{scoped}")) {
        second_piece(line, &scoped).to_string()
    } else if line.contains(&format!("{MAIN_SEPARATOR}{plain}")) {
        let indent = &line[..line.len() - trimmed.len()];
        format!("{indent}at {plain}{}", second_piece(line, &plain))
    } else {
        line.to_string()
    }
}

/// Rewrite every frame of `trace` under `namespace`.
pub fn rewrite_stack(trace: &str, namespace: &str) -> String {
    trace
        .split('\n')
        .map(|line| rewrite_line(line, namespace))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rewrite frames under [`DEFAULT_NAMESPACE`], returning the same kind of value.
pub fn error_message<T: StackTrace>(err: T) -> T {
    error_message_in(err, DEFAULT_NAMESPACE)
}

pub fn error_message_in<T: StackTrace>(err: T, namespace: &str) -> T {
    let stack = rewrite_stack(err.stack(), namespace);
    err.with_stack(stack)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_package_frames() {
        let trace = "Error: boom\n    at run (/srv/node_modules/@hydrooj/utils/lib/a.js:1:2)";
        assert_eq!(
            error_message(trace.to_string()),
            "Error: boom\nutils/lib/a.js:1:2)"
        );
    }

    #[test]
    fn test_plain_namespace_frames_keep_indent() {
        let trace = "    at x (/home/u/hydrooj/packages/ui/a.js:3:4)";
        assert_eq!(
            rewrite_stack(trace, DEFAULT_NAMESPACE),
            "    at hydrooj/packages/ui/a.js:3:4)"
        );
    }

    #[test]
    fn test_non_frame_lines_untouched() {
        let trace = "message mentions /x/hydrooj/y\n    at other (/opt/lib/z.js:1:1)";
        assert_eq!(rewrite_stack(trace, DEFAULT_NAMESPACE), trace);
    }

    #[test]
    fn test_report_keeps_message() {
        let report = ErrorReport::new("boom", "  at f (/a/@acme/core/x.rs:1)");
        let rewritten = error_message_in(report, "acme");
        assert_eq!(rewritten.message, "boom");
        assert_eq!(rewritten.stack, "core/x.rs:1)");
    }
}
