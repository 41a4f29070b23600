//! Ambient key-value storage.
//!
//! [`KeyValueStorage`] is a string-to-string store in the shape of browser
//! local storage. [`get_json`] and [`set_json`] layer [`Value`] encoding on
//! top of any implementation; reads never fail and fall back to a default
//! when an item is missing or does not decode.

mod errors;
mod memory;

pub use errors::StorageError;
pub use memory::MemoryStorage;

use crate::{Result, Value};

/// A string key-value store.
pub trait KeyValueStorage: Send + Sync + std::fmt::Debug {
    /// Returns the item stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous item.
    fn set_item(&self, key: &str, value: String) -> Result<()>;

    /// Removes the item under `key`, returning true if it existed.
    fn remove_item(&self, key: &str) -> bool;

    /// Removes every item.
    fn clear(&self);

    /// Returns all keys in sorted order.
    fn keys(&self) -> Vec<String>;
}

/// Reads the item under `key` as JSON.
///
/// Returns `default` if the item is missing or is not valid JSON.
pub fn get_json<S>(storage: &S, key: &str, default: impl Into<Value>) -> Value
where
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get_item(key) else {
        return default.into();
    };
    match Value::from_json_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(key, error = %err, "Stored item is not valid JSON; using default");
            default.into()
        }
    }
}

/// Writes `value` under `key` as JSON text.
///
/// # Errors
/// Returns the storage's error if the write is rejected (for example
/// [`StorageError::QuotaExceeded`]).
pub fn set_json<S>(storage: &S, key: &str, value: &Value) -> Result<()>
where
    S: KeyValueStorage + ?Sized,
{
    storage.set_item(key, value.to_json_string())
}
