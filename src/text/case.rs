//! Case conversion, applied to strings or deeply to object keys.
//!
//! [`deepen`] lifts a string mapping into a transformer over
//! [`serde_json::Value`]. Only a top-level string is mapped as a value;
//! inside arrays and objects it is the *keys* that change while leaf scalars
//! pass through untouched.

use serde_json::{Map, Value};

/// Lift `modify` into a deep transformer over keys.
pub fn deepen<F>(modify: F) -> impl Fn(&Value) -> Value
where
    F: Fn(&str) -> String,
{
    move |source: &Value| match source {
        Value::String(s) => Value::String(modify(s)),
        other => modify_keys(other, &modify),
    }
}

fn modify_keys<F>(source: &Value, modify: &F) -> Value
where
    F: Fn(&str) -> String,
{
    match source {
        Value::Array(items) => Value::Array(items.iter().map(|v| modify_keys(v, modify)).collect()),
        Value::Object(entries) => {
            let mut result = Map::with_capacity(entries.len());
            for (key, value) in entries {
                result.insert(modify(key), modify_keys(value, modify));
            }
            Value::Object(result)
        }
        scalar => scalar.clone(),
    }
}

/// `foo_bar` / `foo-bar` → `fooBar`. Only a lowercase ASCII letter after the
/// separator is folded.
pub fn camel_case_str(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' || c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

fn split_capitals(source: &str, from: char, sep: char) -> String {
    let mut out = String::with_capacity(source.len() + 4);
    for (i, c) in source.chars().enumerate() {
        if c == from {
            out.push(sep);
        } else if i > 0 && c.is_ascii_uppercase() {
            out.push(sep);
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `fooBar` / `foo_bar` → `foo-bar`.
pub fn param_case_str(source: &str) -> String {
    split_capitals(source, '_', '-')
}

/// `fooBar` / `foo-bar` → `foo_bar`.
pub fn snake_case_str(source: &str) -> String {
    split_capitals(source, '-', '_')
}

/// Deep camelCase conversion.
pub fn camel_case(source: &Value) -> Value {
    deepen(camel_case_str)(source)
}

/// Deep param-case (kebab) conversion.
pub fn param_case(source: &Value) -> Value {
    deepen(param_case_str)(source)
}

/// Deep snake_case conversion.
pub fn snake_case(source: &Value) -> Value {
    deepen(snake_case_str)(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_helpers() {
        assert_eq!(camel_case_str("a_b-c"), "aBC");
        assert_eq!(camel_case_str("a_1"), "a_1");
        assert_eq!(camel_case_str("trailing_"), "trailing_");
        assert_eq!(param_case_str("fooBar_baz"), "foo-bar-baz");
        assert_eq!(snake_case_str("fooBar-baz"), "foo_bar_baz");
    }

    #[test]
    fn test_leading_capital_untouched() {
        assert_eq!(param_case_str("FooBar"), "Foo-bar");
        assert_eq!(snake_case_str("ID"), "I_d");
    }

    #[test]
    fn test_deep_keys() {
        let input = json!({"a_b": {"c_d": [{"e_f": "g_h"}]}, "x": 1});
        assert_eq!(
            camel_case(&input),
            json!({"aB": {"cD": [{"eF": "g_h"}]}, "x": 1})
        );
    }

    #[test]
    fn test_top_level_string_is_mapped() {
        assert_eq!(snake_case(&json!("someKey")), json!("some_key"));
        assert_eq!(snake_case(&json!(["someKey"])), json!(["someKey"]));
        assert_eq!(param_case(&json!(null)), json!(null));
    }

    #[test]
    fn test_custom_transformer() {
        let upper = deepen(|s: &str| s.to_uppercase());
        assert_eq!(upper(&json!({"k": {"n": 1}})), json!({"K": {"N": 1}}));
    }
}
