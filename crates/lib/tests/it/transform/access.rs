use serde_json::json as j;
use shapekit::{
    PathBuf, Value,
    transform::{delete, get, get_ref, has, set},
};

use crate::helpers::json;

#[test]
fn test_get_missing_returns_default() {
    let data = json(j!({"user": {"name": "Sam"}}));
    assert_eq!(get(&data, "user.age", 0), 0.0);
    assert_eq!(get(&data, "user.name.first", "?"), "?");
    assert_eq!(get(&data, "user.name", Value::Null), "Sam");
}

#[test]
fn test_get_present_null_is_not_default() {
    let data = json(j!({"a": null}));
    assert_eq!(get(&data, "a", 5), Value::Null);
    assert!(has(&data, "a"));
    assert!(!has(&data, "b"));
}

#[test]
fn test_get_descends_sequences_by_index() {
    let data = json(j!({"items": [{"id": "x"}, {"id": "y"}]}));
    assert_eq!(get(&data, "items.1.id", Value::Null), "y");
    assert!(!has(&data, "items.2.id"));
    assert!(!has(&data, "items.first.id"));
    assert_eq!(get_ref(&data, "items.0"), Some(&json(j!({"id": "x"}))));
}

#[test]
fn test_set_then_get() {
    let mut data = Value::map();
    let paths = ["a", "a2.b", "deep.er.than.that", "x.y"];
    for (i, path) in paths.iter().enumerate() {
        set(&mut data, *path, i as i64);
    }
    for (i, path) in paths.iter().enumerate() {
        assert_eq!(get(&data, *path, Value::Null), i as f64, "path {path}");
    }
}

#[test]
fn test_set_returns_previous_value() {
    let mut data = json(j!({"a": {"b": 1}}));
    assert_eq!(set(&mut data, "a.b", 2), Some(Value::from(1)));
    assert_eq!(set(&mut data, "a.c", 3), None);
    assert_eq!(data, json(j!({"a": {"b": 2, "c": 3}})));
}

#[test]
fn test_set_replaces_non_mapping_intermediates() {
    let mut data = json(j!({"a": 5}));
    set(&mut data, "a.b", true);
    assert_eq!(data, json(j!({"a": {"b": true}})));

    let mut data = json(j!({"a": {"list": [1, 2], "keep": true}}));
    assert_eq!(set(&mut data, "a.list.x.y", 1), None);
    assert_eq!(
        data,
        json(j!({"a": {"list": {"x": {"y": 1}}, "keep": true}}))
    );

    let mut root = Value::from("not a map");
    set(&mut root, "k", 1);
    assert_eq!(root, json(j!({"k": 1})));
}

#[test]
fn test_empty_path_addresses_nothing() {
    let mut data = json(j!({"a": 1}));
    assert_eq!(get(&data, "", "default"), "default");
    assert!(!has(&data, ""));
    assert_eq!(set(&mut data, "..", 2), None);
    assert!(!delete(&mut data, ""));
    assert_eq!(data, json(j!({"a": 1})));
}

#[test]
fn test_paths_normalize_empty_segments() {
    let mut data = Value::map();
    set(&mut data, ".a..b.", 1);
    assert_eq!(data, json(j!({"a": {"b": 1}})));
    assert!(has(&data, "a.b"));
    assert!(has(&data, PathBuf::normalize("a..b")));
}

#[test]
fn test_delete_removes_entry_and_keeps_order() {
    let mut data = json(j!({"a": 1, "b": {"c": 2, "d": 3}, "e": 4}));
    assert!(delete(&mut data, "b.c"));
    assert!(delete(&mut data, "a"));
    assert!(!delete(&mut data, "a"));
    assert!(!delete(&mut data, "missing.path"));
    assert_eq!(data.to_json_string(), r#"{"b":{"d":3},"e":4}"#);
}
