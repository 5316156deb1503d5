//! Heuristic class detection for script-side constructors.
//!
//! Plugins hand the host callables described by their source text and a few
//! facts about their prototype. [`is_class`] guesses whether such a callable
//! is meant to be constructed with `new` or called directly. It is
//! best-effort: transpiled output can defeat any of these checks.

use regex_lite::Regex;
use std::sync::LazyLock;

static ANONYMOUS_FN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^function\s+\(|^function\s+anonymous\(").expect("valid regex"));
static CAPITALIZED_FN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^function\s+[A-Z]").expect("valid regex"));
static THIS_USAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\(this\b|\bthis[.\[]\b").expect("valid regex"));
static CLASS_CALL_CHECK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"classCallCheck\(this").expect("valid regex"));
static DEFAULT_EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^function\sdefault_\d+\s*\(").expect("valid regex"));

/// What the host knows about a script callable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionShape {
    /// Source text as printed by the script runtime
    pub source: String,
    /// Whether the callable has a `prototype` object at all
    pub has_prototype: bool,
    /// Whether `prototype.constructor` points back at the callable
    pub constructor_is_self: bool,
    /// Own property names on the prototype, `constructor` included
    pub prototype_properties: usize,
}

impl FunctionShape {
    /// Shape of a callable with an ordinary prototype holding only `constructor`.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            has_prototype: true,
            constructor_is_self: true,
            prototype_properties: 1,
        }
    }

    pub fn with_prototype_properties(mut self, count: usize) -> Self {
        self.prototype_properties = count;
        self
    }
}

/// Guess whether `shape` describes a class-style constructor.
///
/// `strict` additionally accepts capitalized function names and rejects
/// `this`-using functions that lack a transpiler class marker.
pub fn is_class(shape: &FunctionShape, strict: bool) -> bool {
    if !shape.has_prototype || !shape.constructor_is_self {
        return false;
    }
    let src = shape.source.as_str();
    if src.starts_with("class") {
        return true;
    }
    if shape.prototype_properties >= 2 {
        return true;
    }
    if ANONYMOUS_FN_RE.is_match(src) {
        return false;
    }
    if strict && CAPITALIZED_FN_RE.is_match(src) {
        return true;
    }
    if THIS_USAGE_RE.is_match(src) {
        if !strict || CLASS_CALL_CHECK_RE.is_match(src) {
            return true;
        }
        return DEFAULT_EXPORT_RE.is_match(src);
    }
    false
}
