//! Dot-path access into nested values.
//!
//! Reads ([`get`], [`get_ref`], [`has`]) walk mappings by key and sequences
//! by numeric index. Writes ([`set`], [`delete`]) address mappings: `set`
//! creates missing intermediate mappings and replaces anything in the way
//! that is not a mapping.

use crate::value::{Map, Path, Value};

/// Returns a reference to the value at `path`, or `None` if any segment is
/// missing.
///
/// The empty path addresses nothing and always yields `None`.
pub fn get_ref<'a>(value: &'a Value, path: impl AsRef<Path>) -> Option<&'a Value> {
    let path = path.as_ref();
    if path.is_empty() {
        return None;
    }

    let mut current = value;
    for segment in path.segments() {
        current = match current {
            Value::Map(entries) => entries.get(segment)?,
            Value::List(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn get_mut<'a>(value: &'a mut Value, segments: &[&str]) -> Option<&'a mut Value> {
    let mut current = value;
    for segment in segments {
        current = match current {
            Value::Map(entries) => entries.get_mut(*segment)?,
            Value::List(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Returns a copy of the value at `path`, or `default` if any segment is
/// missing.
///
/// A key that is present with a null value yields null, not the default.
///
/// ```
/// # use shapekit::{Value, transform::get};
/// let user = Value::from_json_str(r#"{"user": {"name": "Sam"}}"#).unwrap();
/// assert_eq!(get(&user, "user.name", Value::Null), "Sam");
/// assert_eq!(get(&user, "user.age", 0), 0.0);
/// ```
pub fn get(value: &Value, path: impl AsRef<Path>, default: impl Into<Value>) -> Value {
    let path = path.as_ref();
    match get_ref(value, path) {
        Some(found) => found.clone(),
        None => {
            tracing::debug!(path = %path, "Path not found; using default");
            default.into()
        }
    }
}

/// Stores `new_value` at `path`, returning the value it replaced.
///
/// Missing intermediate segments are created as empty mappings. An
/// intermediate (or root) value that is not a mapping is replaced by an
/// empty mapping. The empty path leaves `value` untouched.
///
/// ```
/// # use shapekit::{Value, transform::{get, set}};
/// let mut config = Value::map();
/// set(&mut config, "server.port", 8080);
/// assert_eq!(get(&config, "server.port", Value::Null), 8080.0);
/// ```
pub fn set(value: &mut Value, path: impl AsRef<Path>, new_value: impl Into<Value>) -> Option<Value> {
    let path = path.as_ref();
    let Some((parents, last)) = path.split_last() else {
        tracing::debug!("set called with an empty path; nothing to do");
        return None;
    };
    set_in(value, &parents, last, new_value.into())
}

fn set_in(value: &mut Value, parents: &[&str], last: &str, new_value: Value) -> Option<Value> {
    let mut entries = match std::mem::take(value) {
        Value::Map(entries) => entries,
        other => {
            tracing::trace!(kind = other.type_name(), "Replacing non-mapping with a mapping");
            Map::new()
        }
    };
    let previous = match parents.split_first() {
        Some((head, rest)) => {
            let child = entries.entry(head.to_string()).or_insert_with(Value::map);
            set_in(child, rest, last, new_value)
        }
        None => entries.insert(last.to_string(), new_value),
    };
    *value = Value::Map(entries);
    previous
}

/// Returns true if every segment of `path` is present.
///
/// A key holding null counts as present.
pub fn has(value: &Value, path: impl AsRef<Path>) -> bool {
    get_ref(value, path).is_some()
}

/// Removes the mapping entry at `path`.
///
/// Returns true if the entry existed and was removed. The remaining
/// entries keep their order.
pub fn delete(value: &mut Value, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let Some((parents, last)) = path.split_last() else {
        return false;
    };

    match get_mut(value, &parents) {
        Some(Value::Map(entries)) => entries.shift_remove(last).is_some(),
        _ => {
            tracing::debug!(path = %path, "Nothing to delete");
            false
        }
    }
}
