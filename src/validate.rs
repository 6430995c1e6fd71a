//! Syntactic validators for request parameters.
//!
//! Every value arriving in a path segment or query string passes through
//! here before any filter or update document is built. Validators are pure
//! and total: any string input, including empty strings, control characters
//! and store-query metacharacters, yields a plain boolean.

use std::sync::OnceLock;

use regex::Regex;

/// The kinds of parameter docgate knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Namespace tag: one or more of `A-Z a-z 0-9 _ -`.
    ObjectType,

    /// Store-assigned identifier: exactly 24 characters of `0-9 a-z`.
    Id,

    /// Digits-only literal. Used to decide how a search or update value
    /// should be typed, never to validate identifiers.
    Numeric,
}

fn object_type_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[0-9a-zA-Z_-]+$").expect("objectType pattern"))
}

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[0-9a-z]{24}$").expect("id pattern"))
}

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[0-9]+$").expect("numeric pattern"))
}

/// Check that `value` is syntactically well-formed for the given kind.
pub fn validate(value: &str, kind: ParamKind) -> bool {
    match kind {
        ParamKind::ObjectType => object_type_pattern().is_match(value),
        ParamKind::Id => id_pattern().is_match(value),
        ParamKind::Numeric => numeric_pattern().is_match(value),
    }
}
