//! Loose reading of JSON response fields.
//!
//! The API omits fields freely and mixes strings and numbers, so display
//! code treats `null`, `false`, `0`, `""` and missing fields alike as
//! "no value" and falls back to a default.

use serde_json::Value;

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text shown for a field: strings verbatim, scalars in their JSON form,
/// `null` as empty text and containers as compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => compact_json(value),
    }
}

pub fn text_or(value: &Value, default: &str) -> String {
    if is_truthy(value) {
        display_text(value)
    } else {
        default.to_string()
    }
}

pub fn compact_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
