//! Type coercion for textual search and update values.
//!
//! Query strings are always textual, but stored data is typed: a field
//! written as the integer `42` would never match a text search for `"42"`.
//! The classifier decides whether a raw value reads as a number, a JSON
//! literal, or plain text, and search filters match both the typed and the
//! string representation since stored data may carry either.

use serde_json::Value;

use crate::validate::{validate, ParamKind};

use super::filter::ValueMatch;

/// How a raw textual value should be typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarClass {
    /// Digits only, e.g. `42`.
    Numeric,
    /// Exactly `true`, `false` or `null`.
    Literal,
    /// Anything else.
    Text,
}

/// Classify a raw value. Numeric wins over literal, literal over text.
pub fn classify(raw: &str) -> ScalarClass {
    if validate(raw, ParamKind::Numeric) {
        ScalarClass::Numeric
    } else if raw == "true" || raw == "false" || raw == "null" {
        ScalarClass::Literal
    } else {
        ScalarClass::Text
    }
}

/// Parse a digits-only value into a JSON number.
///
/// Values past i64 range fall back to f64; a value too large even for a
/// finite f64 yields None and stays textual.
fn numeric_value(raw: &str) -> Option<Value> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::from(n));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

fn literal_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Null,
    }
}

/// Build the match condition for a search value.
///
/// Numbers and literals match either representation; text matches exactly
/// (equality, not substring).
pub fn search_match(raw: &str) -> ValueMatch {
    match classify(raw) {
        ScalarClass::Numeric => match numeric_value(raw) {
            Some(number) => ValueMatch::AnyOf(vec![Value::String(raw.to_string()), number]),
            None => ValueMatch::Exact(Value::String(raw.to_string())),
        },
        ScalarClass::Literal => {
            ValueMatch::AnyOf(vec![Value::String(raw.to_string()), literal_value(raw)])
        }
        ScalarClass::Text => ValueMatch::Exact(Value::String(raw.to_string())),
    }
}

/// Coerce a single update value before it is written.
///
/// Only strings are reinterpreted; values that arrive already typed
/// (numbers, booleans, nulls, nested structures) pass through untouched.
pub fn coerce_update(value: &Value) -> Value {
    let raw = match value {
        Value::String(raw) => raw,
        _ => return value.clone(),
    };

    match classify(raw) {
        ScalarClass::Numeric => numeric_value(raw).unwrap_or_else(|| value.clone()),
        ScalarClass::Literal => literal_value(raw),
        ScalarClass::Text => value.clone(),
    }
}
