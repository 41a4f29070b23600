//! Key-value storage integration tests

use std::sync::Arc;

use serde_json::json as j;
use shapekit::{
    Value,
    storage::{KeyValueStorage, MemoryStorage, StorageError, get_json, set_json},
};

use crate::helpers::json;

#[test]
fn test_item_lifecycle() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("k"), None);

    storage.set_item("k", "v1".to_string()).unwrap();
    storage.set_item("a", "v2".to_string()).unwrap();
    assert_eq!(storage.get_item("k").as_deref(), Some("v1"));
    assert_eq!(storage.keys(), vec!["a", "k"]);

    assert!(storage.remove_item("k"));
    assert!(!storage.remove_item("k"));

    storage.clear();
    assert!(storage.keys().is_empty());
    assert_eq!(storage.used_bytes(), 0);
}

#[test]
fn test_json_round_trip() {
    let storage = MemoryStorage::new();
    let prefs = json(j!({"theme": "dark", "recent": [1, 2, 3]}));
    set_json(&storage, "prefs", &prefs).unwrap();

    assert_eq!(
        storage.get_item("prefs").as_deref(),
        Some(r#"{"theme":"dark","recent":[1,2,3]}"#)
    );
    assert_eq!(get_json(&storage, "prefs", Value::Null), prefs);
}

#[test]
fn test_get_json_falls_back_to_default() {
    let storage = MemoryStorage::new();
    assert_eq!(get_json(&storage, "missing", 7), 7.0);

    storage.set_item("broken", "{oops".to_string()).unwrap();
    assert_eq!(get_json(&storage, "broken", "fallback"), "fallback");
}

#[test]
fn test_quota_rejects_oversized_write() {
    let storage = MemoryStorage::with_quota(16);
    set_json(&storage, "a", &Value::from("1234")).unwrap();

    let err = set_json(&storage, "b", &Value::from("0123456789")).unwrap_err();
    assert!(err.is_capacity_error());
    assert_eq!(err.module(), "storage");
    match err {
        shapekit::Error::Storage(storage_err) => {
            assert!(storage_err.is_quota_error());
            assert_eq!(storage_err.key(), "b");
            assert!(matches!(
                storage_err,
                StorageError::QuotaExceeded { quota: 16, .. }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(storage.keys(), vec!["a"]);
}

#[test]
fn test_storage_as_trait_object() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let writer = {
        let storage = Arc::clone(&storage);
        std::thread::spawn(move || set_json(storage.as_ref(), "count", &Value::from(3)))
    };
    writer.join().unwrap().unwrap();
    assert_eq!(get_json(storage.as_ref(), "count", 0), 3.0);
}
