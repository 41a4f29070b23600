//! Coercion of values between kinds.

use std::{fmt, str::FromStr};

use super::TransformError;
use crate::value::{Map, Value};

/// Kind a value can be coerced into with [`convert_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl FromStr for TargetType {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(TargetType::String),
            "number" => Ok(TargetType::Number),
            "boolean" => Ok(TargetType::Boolean),
            "array" => Ok(TargetType::Array),
            "object" => Ok(TargetType::Object),
            _ => Err(TransformError::UnknownTarget {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetType::String => "string",
            TargetType::Number => "number",
            TargetType::Boolean => "boolean",
            TargetType::Array => "array",
            TargetType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Coerces `value` into the `target` kind.
///
/// Conversion never fails. Input that cannot be read as the target kind
/// falls back to a kind-appropriate default: non-numeric text becomes `0`,
/// and text that does not parse as a JSON array (or object) is wrapped
/// instead.
///
/// ```
/// # use shapekit::{Value, transform::{convert_type, TargetType}};
/// assert_eq!(convert_type(&Value::from("abc"), TargetType::Number), 0.0);
/// assert_eq!(convert_type(&Value::from(42), TargetType::String), "42");
/// ```
pub fn convert_type(value: &Value, target: TargetType) -> Value {
    match target {
        TargetType::String => Value::Text(to_text(value)),
        TargetType::Number => Value::Number(to_number(value)),
        TargetType::Boolean => Value::Bool(value.is_truthy()),
        TargetType::Array => to_array(value),
        TargetType::Object => to_object(value),
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::List(_) | Value::Map(_) => value.to_json_string(),
        other => other.to_key_string(),
    }
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Text(s) => parse_number(s),
        Value::Date(d) => d.timestamp_millis() as f64,
        Value::Null | Value::List(_) | Value::Map(_) => 0.0,
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => {
            tracing::debug!(text = trimmed, "Text is not numeric; coercing to 0");
            0.0
        }
    }
}

/// Parses text as JSON, returning `None` (and tracing why) when it is not.
fn parse_json(text: &str) -> Option<Value> {
    match Value::from_json_str(text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!(error = %err, "Text is not valid JSON; wrapping it instead");
            None
        }
    }
}

fn to_array(value: &Value) -> Value {
    match value {
        Value::List(_) => value.clone(),
        Value::Null => Value::list(),
        Value::Text(s) => match parse_json(s) {
            Some(parsed @ Value::List(_)) => parsed,
            _ => Value::List(vec![value.clone()]),
        },
        other => Value::List(vec![other.clone()]),
    }
}

fn to_object(value: &Value) -> Value {
    match value {
        Value::Map(_) => value.clone(),
        Value::Null => Value::map(),
        Value::Text(s) => match parse_json(s) {
            Some(parsed @ Value::Map(_)) => parsed,
            _ => wrap(value),
        },
        other => wrap(other),
    }
}

fn wrap(value: &Value) -> Value {
    let mut entries = Map::new();
    entries.insert("value".to_string(), value.clone());
    Value::Map(entries)
}
