//! Per-field coercion helpers
//!
//! Agent payloads are weakly typed; each field is recovered independently so
//! one malformed value never aborts the whole parse. Empty strings, zeros,
//! nulls, and `false` all count as "not supplied" and fall back to the
//! default, matching the lenient truthiness the upstream agents assume.

use serde_json::Value;

/// Coerce a value to a string, falling back to `default`
#[must_use]
pub fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => default.to_string(),
    }
}

/// Coerce a value to a non-negative number, defaulting to 0
///
/// Numeric strings are accepted; anything unparseable or negative yields 0.
#[must_use]
pub fn number_or_zero(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}

/// Coerce a value to a non-negative integer count, defaulting to 0
#[inline]
#[must_use]
pub fn count_or_zero(value: Option<&Value>) -> u64 {
    number_or_zero(value) as u64
}

/// Coerce a value to a list of strings, defaulting to empty
///
/// Scalar elements are stringified; nested structures are dropped.
#[must_use]
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

/// Lenient truthiness: null, `false`, 0, and "" are false
#[must_use]
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}
