//! # Text Helpers
//!
//! Template substitution, random identifiers and case conversion.
//!
//! Dynamic arguments are carried as [`serde_json::Value`] and rendered with
//! [`display_value`], which follows the host application's string coercion
//! rules so that formatted output matches what the services already emit.
//!
//! ## Components
//! - **Format**: `{0}` / `{name}` placeholder substitution and `{@}` splicing
//! - **Random**: alphanumeric identifiers from a non-cryptographic RNG
//! - **Case**: camel / param / snake conversion applied deeply over keys

pub mod case;
pub mod format;
pub mod random;

pub use case::{camel_case, deepen, param_case, snake_case};
pub use format::{format, format_from_array, format_named, rawformat};
pub use random::{random_string, random_string_with, DEFAULT_RANDOM_LENGTH};

use serde_json::Value;

/// Largest integer magnitude an `f64` holds exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Render a number the way the host prints it: shortest round-trip digits,
/// no trailing `.0`, and exponent form (`1e+21`, `1e-7`) once the decimal
/// exponent leaves `[-7, 21)`.
pub fn display_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. `1.2345e3`
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let Ok(exp) = exp.parse::<i32>() else {
        return n.to_string();
    };
    let k = digits.len() as i32;
    // position of the decimal point relative to the first digit
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exp.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", exp.abs())
        }
    };

    if n < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Coerce an arbitrary value to the string the host would produce.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64().filter(|i| i.unsigned_abs() <= MAX_SAFE_INTEGER) {
                i.to_string()
            } else {
                display_number(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
