//! Traversal over sequences and mappings: map, filter, flatten, grouping,
//! sorting and a few sequence helpers.

use std::cmp::Ordering;

use rand::{Rng, seq::SliceRandom};

use super::{TransformError, structure::is_equal};
use crate::value::{Map, Value};

/// Position of an element handed to [`map`] and [`filter`] callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Index into a sequence
    Index(usize),
    /// Key of a mapping entry
    Name(&'a str),
}

/// Sort direction for one key of [`sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl From<&str> for Order {
    /// `"desc"` and `"descending"` (any case) sort descending; anything else
    /// sorts ascending.
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "desc" | "descending" => Order::Descending,
            _ => Order::Ascending,
        }
    }
}

fn require_sequence<'a>(
    data: &'a Value,
    operation: &'static str,
) -> Result<&'a Vec<Value>, TransformError> {
    data.as_list().ok_or(TransformError::NotASequence {
        operation,
        actual: data.type_name(),
    })
}

/// Replaces every element of a sequence or mapping with `f(value, key)`.
///
/// The result has the same kind as the input. Any other kind of value is
/// returned unchanged.
///
/// ```
/// # use shapekit::{Value, transform::map};
/// let doubled = map(&Value::from(vec![1, 2]), |v, _| {
///     Value::from(v.as_number().unwrap_or(0.0) * 2.0)
/// });
/// assert_eq!(doubled, Value::from(vec![2, 4]));
/// ```
pub fn map<F>(data: &Value, mut f: F) -> Value
where
    F: FnMut(&Value, Key<'_>) -> Value,
{
    match data {
        Value::List(items) => Value::List(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| f(item, Key::Index(i)))
                .collect(),
        ),
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), f(item, Key::Name(key))))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Keeps the elements of a sequence or mapping for which `pred` holds.
///
/// Non-container input is returned unchanged.
pub fn filter<F>(data: &Value, mut pred: F) -> Value
where
    F: FnMut(&Value, Key<'_>) -> bool,
{
    match data {
        Value::List(items) => Value::List(
            items
                .iter()
                .enumerate()
                .filter(|(i, item)| pred(item, Key::Index(*i)))
                .map(|(_, item)| item.clone())
                .collect(),
        ),
        Value::Map(entries) => Value::Map(
            entries
                .iter()
                .filter(|(key, item)| pred(item, Key::Name(key)))
                .map(|(key, item)| (key.clone(), item.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Flattens nested containers into a single sequence of leaves.
///
/// Sequences contribute their elements and mappings their values, in
/// order. `depth` bounds how many container levels below the input are
/// opened; `None` opens all of them. Containers left at the limit are
/// emitted as they are. A leaf input yields a one-element sequence.
///
/// ```
/// # use shapekit::{Value, transform::flatten};
/// let nested = Value::from(vec![Value::from(1), Value::from(vec![2, 3])]);
/// assert_eq!(flatten(&nested, None), vec![Value::from(1), Value::from(2), Value::from(3)]);
/// ```
pub fn flatten(data: &Value, depth: Option<usize>) -> Vec<Value> {
    let mut out = Vec::new();
    match data {
        Value::List(_) | Value::Map(_) => flatten_into(data, depth, &mut out),
        leaf => out.push(leaf.clone()),
    }
    out
}

fn flatten_into(container: &Value, depth: Option<usize>, out: &mut Vec<Value>) {
    let children: Box<dyn Iterator<Item = &Value>> = match container {
        Value::List(items) => Box::new(items.iter()),
        Value::Map(entries) => Box::new(entries.values()),
        _ => return,
    };

    for child in children {
        match depth {
            Some(0) => out.push(child.clone()),
            _ if child.is_leaf() => out.push(child.clone()),
            _ => flatten_into(child, depth.map(|d| d - 1), out),
        }
    }
}

/// Groups the elements of a sequence by the value stored under `key`.
///
/// Elements without the key (or that are not mappings) are grouped under
/// `"null"`. Group order follows first appearance.
///
/// # Errors
/// Returns [`TransformError::NotASequence`] if `data` is not a sequence.
pub fn group_by(data: &Value, key: &str) -> Result<Map, TransformError> {
    group_by_with(data, |item| {
        item.as_map()
            .and_then(|entries| entries.get(key))
            .unwrap_or(&Value::Null)
            .to_key_string()
    })
}

/// Groups the elements of a sequence by a computed key.
///
/// # Errors
/// Returns [`TransformError::NotASequence`] if `data` is not a sequence.
pub fn group_by_with<F>(data: &Value, mut key_fn: F) -> Result<Map, TransformError>
where
    F: FnMut(&Value) -> String,
{
    let items = require_sequence(data, "group_by")?;
    let mut groups = Map::new();
    for item in items {
        let group = groups.entry(key_fn(item)).or_insert_with(Value::list);
        if let Value::List(members) = group {
            members.push(item.clone());
        }
    }
    Ok(groups)
}

/// Ordering rank of each kind when two values of different kinds meet.
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::Text(_) => 3,
        Value::Date(_) => 4,
        Value::List(_) => 5,
        Value::Map(_) => 6,
    }
}

/// Total order used by [`sort_by`].
///
/// Text compares case-insensitively, numbers numerically (`-0` equals `0`,
/// NaN sorts after every other number), dates chronologically, lists by length. Values of
/// different kinds compare by kind.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x
            .partial_cmp(y)
            .unwrap_or_else(|| x.is_nan().cmp(&y.is_nan())),
        (Value::Text(x), Value::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Value::Date(x), Value::Date(y)) => x.cmp(y),
        (Value::List(x), Value::List(y)) => x.len().cmp(&y.len()),
        (Value::Map(x), Value::Map(y)) => x.len().cmp(&y.len()),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Sorts a sequence of mappings by one or more keys.
///
/// `orders[i]` applies to `keys[i]`; missing orders default to ascending.
/// Ties on one key fall through to the next, and elements equal on every
/// key keep their input order. Missing keys sort as null.
///
/// ```
/// # use shapekit::{Value, transform::{sort_by, Order}};
/// let people = Value::from_json_str(r#"[{"n":"Bob"},{"n":"amy"}]"#).unwrap();
/// let sorted = sort_by(&people, &["n"], &[Order::Ascending]).unwrap();
/// assert_eq!(sorted[0].as_map().unwrap()["n"], "amy");
/// ```
///
/// # Errors
/// Returns [`TransformError::NotASequence`] if `data` is not a sequence.
pub fn sort_by(data: &Value, keys: &[&str], orders: &[Order]) -> Result<Vec<Value>, TransformError> {
    let mut items = require_sequence(data, "sort_by")?.clone();
    tracing::trace!(len = items.len(), keys = ?keys, "Sorting sequence");

    // Vec::sort_by is stable.
    items.sort_by(|a, b| {
        for (i, key) in keys.iter().enumerate() {
            let left = field(a, key);
            let right = field(b, key);
            let ordering = match orders.get(i).copied().unwrap_or_default() {
                Order::Ascending => compare_values(left, right),
                Order::Descending => compare_values(right, left),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
    Ok(items)
}

fn field<'a>(item: &'a Value, key: &str) -> &'a Value {
    item.as_map()
        .and_then(|entries| entries.get(key))
        .unwrap_or(&Value::Null)
}

/// Splits a sequence into consecutive chunks of `size` elements.
///
/// The last chunk may be shorter. A `size` of zero yields no chunks.
///
/// # Errors
/// Returns [`TransformError::NotASequence`] if `data` is not a sequence.
pub fn chunk(data: &Value, size: usize) -> Result<Vec<Value>, TransformError> {
    let items = require_sequence(data, "chunk")?;
    if size == 0 {
        return Ok(Vec::new());
    }
    Ok(items
        .chunks(size)
        .map(|part| Value::List(part.to_vec()))
        .collect())
}

/// Removes structurally equal duplicates, keeping first occurrences.
///
/// # Errors
/// Returns [`TransformError::NotASequence`] if `data` is not a sequence.
pub fn unique(data: &Value) -> Result<Vec<Value>, TransformError> {
    let items = require_sequence(data, "unique")?;
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.iter().any(|seen| is_equal(seen, item)) {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// Returns the elements of a sequence in random order.
///
/// # Errors
/// Returns [`TransformError::NotASequence`] if `data` is not a sequence.
pub fn shuffle<R: Rng + ?Sized>(data: &Value, rng: &mut R) -> Result<Vec<Value>, TransformError> {
    let mut items = require_sequence(data, "shuffle")?.clone();
    items.shuffle(rng);
    Ok(items)
}
