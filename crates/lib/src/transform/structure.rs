//! Whole-structure operations: cloning, merging and equality.
//!
//! A [`Value`] owns its children, so a value tree can never refer back to
//! itself. The recursive walks below always terminate.

use crate::value::{Map, Value};

/// Returns an independent deep copy of `value`.
///
/// The copy shares no storage with the input: mutating one never affects
/// the other. Dates are copied as fresh dates and leaves by value.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::List(items) => Value::List(items.iter().map(deep_clone).collect()),
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), deep_clone(item)))
                .collect(),
        ),
        Value::Date(date) => Value::Date(*date),
        leaf => leaf.clone(),
    }
}

/// Merges `source` into a copy of `target`.
///
/// For every key of `source`: when both sides hold a mapping the two are
/// merged recursively, otherwise the value from `source` replaces the one
/// in `target` (lists are replaced, not concatenated). Keys only in
/// `target` are kept. Neither argument is modified.
///
/// If either argument is not a mapping the result is a copy of `target`.
///
/// ```
/// # use shapekit::{Value, transform::deep_merge};
/// let target = Value::from_json_str(r#"{"a": {"x": 1, "y": 2}, "keep": true}"#).unwrap();
/// let source = Value::from_json_str(r#"{"a": {"y": 3}, "new": "n"}"#).unwrap();
/// let merged = deep_merge(&target, &source);
/// assert_eq!(
///     merged,
///     Value::from_json_str(r#"{"a": {"x": 1, "y": 3}, "keep": true, "new": "n"}"#).unwrap()
/// );
/// ```
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Map(target_entries), Value::Map(source_entries)) => {
            Value::Map(merge_maps(target_entries, source_entries))
        }
        _ => {
            tracing::debug!(
                target_kind = target.type_name(),
                source_kind = source.type_name(),
                "deep_merge needs two mappings; returning a copy of the target"
            );
            deep_clone(target)
        }
    }
}

fn merge_maps(target: &Map, source: &Map) -> Map {
    let mut merged: Map = target
        .iter()
        .map(|(key, item)| (key.clone(), deep_clone(item)))
        .collect();

    for (key, incoming) in source {
        let next = match (merged.get(key), incoming) {
            (Some(Value::Map(existing)), Value::Map(incoming_entries)) => {
                tracing::trace!(key = %key, "Merging nested mapping");
                Value::Map(merge_maps(existing, incoming_entries))
            }
            _ => deep_clone(incoming),
        };
        merged.insert(key.clone(), next);
    }
    merged
}

/// Structural equality.
///
/// Mappings are equal when they hold the same keys with equal values,
/// regardless of insertion order. Sequences are equal when they have the
/// same length and equal elements pairwise. Values of different kinds are
/// never equal. NaN equals NaN, so every value is equal to its own clone.
pub fn is_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| is_equal(l, r))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| is_equal(l, r)))
        }
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x == y,
        _ => false,
    }
}
