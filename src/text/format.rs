//! Placeholder substitution for message templates.
//!
//! Templates use `{0}`, `{1}`, ... for positional arguments and `{name}` for
//! named ones. Substitution is literal and global; `null` arguments are
//! treated as absent and leave their placeholder in place.

use serde_json::{Map, Value};

use super::display_value;

/// Marker split on by [`rawformat`]
pub const RAW_MARKER: &str = "{@}";

/// Substitute `args` into `template`.
///
/// A single object argument switches to named substitution; anything else is
/// positional.
///
/// ```rust
/// use hydro_utils::text::format;
/// use serde_json::json;
///
/// assert_eq!(format("{0}-{1}", &[json!("a"), json!("b")]), "a-b");
/// assert_eq!(format("{x}", &[json!({"x": 5})]), "5");
/// ```
pub fn format(template: &str, args: &[Value]) -> String {
    match args {
        [Value::Object(named)] => format_named(template, named),
        _ => format_from_array(template, args),
    }
}

/// Replace every `{i}` with the `i`-th argument, in argument order.
pub fn format_from_array(template: &str, args: &[Value]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        if arg.is_null() {
            continue;
        }
        result = result.replace(&format!("{{{i}}}"), &display_value(arg));
    }
    result
}

/// Replace every `{key}` with the matching property of `args`.
pub fn format_named(template: &str, args: &Map<String, Value>) -> String {
    let mut result = template.to_string();
    for (key, value) in args {
        if value.is_null() {
            continue;
        }
        result = result.replace(&format!("{{{key}}}"), &display_value(value));
    }
    result
}

/// Splice `value` into `template` at the first `{@}` marker.
///
/// The pieces are comma-joined rather than concatenated, and a template
/// without a marker gains a trailing `,`:
///
/// ```rust
/// use hydro_utils::text::rawformat;
/// use serde_json::json;
///
/// assert_eq!(rawformat("a{@}b", &json!(5)), "a,5,b");
/// assert_eq!(rawformat("ab", &json!(5)), "ab,5,");
/// ```
pub fn rawformat(template: &str, value: &Value) -> String {
    let mut parts = template.split(RAW_MARKER);
    let head = parts.next().unwrap_or_default();
    let tail = parts.next().unwrap_or_default();
    let middle = match value {
        Value::Null => String::new(),
        other => display_value(other),
    };
    [head, middle.as_str(), tail].join(",")
}
