use rand::{SeedableRng, rngs::StdRng};
use serde_json::json as j;
use shapekit::{
    Value,
    transform::{
        Key, Order, TransformError, chunk, filter, flatten, group_by, group_by_with, map, shuffle,
        sort_by, unique,
    },
};

use crate::helpers::{json, names, people};

// ===== MAP / FILTER =====

#[test]
fn test_map_over_mapping_passes_keys() {
    let scores = json(j!({"a": 1, "b": 2}));
    let labelled = map(&scores, |value, key| match key {
        Key::Name(name) => Value::from(format!("{name}={value}")),
        Key::Index(_) => Value::Null,
    });
    assert_eq!(labelled, json(j!({"a": "a=1", "b": "b=2"})));
}

#[test]
fn test_map_leaves_leaves_alone() {
    let leaf = Value::from("text");
    assert_eq!(map(&leaf, |_, _| Value::Null), leaf);
}

#[test]
fn test_filter_sequence_by_index() {
    let letters = json(j!(["a", "b", "c", "d"]));
    let even = filter(&letters, |_, key| matches!(key, Key::Index(i) if i % 2 == 0));
    assert_eq!(even, json(j!(["a", "c"])));
}

#[test]
fn test_filter_mapping_keeps_order() {
    let flags = json(j!({"z": true, "y": false, "x": true}));
    let on = filter(&flags, |value, _| value.is_truthy());
    assert_eq!(on.to_json_string(), r#"{"z":true,"x":true}"#);
}

// ===== FLATTEN =====

#[test]
fn test_flatten_unbounded() {
    let nested = json(j!([1, [2, [3, {"a": 4, "b": [5]}]], []]));
    let flat = flatten(&nested, None);
    assert_eq!(Value::List(flat), json(j!([1, 2, 3, 4, 5])));
}

#[test]
fn test_flatten_with_depth() {
    let nested = json(j!([1, [2, [3, [4]]]]));
    assert_eq!(Value::List(flatten(&nested, Some(0))), nested);
    assert_eq!(
        Value::List(flatten(&nested, Some(1))),
        json(j!([1, 2, [3, [4]]]))
    );
}

#[test]
fn test_flatten_leaf() {
    assert_eq!(flatten(&Value::from(7), None), vec![Value::from(7)]);
}

// ===== GROUP BY =====

#[test]
fn test_group_by_field() {
    let data = json(j!([{"t": "a", "i": 1}, {"t": "b", "i": 2}, {"t": "a", "i": 3}]));
    let groups = group_by(&data, "t").unwrap();

    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(
        Value::Map(groups),
        json(j!({
            "a": [{"t": "a", "i": 1}, {"t": "a", "i": 3}],
            "b": [{"t": "b", "i": 2}],
        }))
    );
}

#[test]
fn test_group_by_missing_field_groups_under_null() {
    let groups = group_by(&people(), "team").unwrap();
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["red", "blue", "null"]);
    assert_eq!(groups["red"].as_list().map(Vec::len), Some(2));
}

#[test]
fn test_group_by_numbers_uses_display_form() {
    let groups = group_by(&people(), "age").unwrap();
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["30", "25", "41"]);
}

#[test]
fn test_group_by_with_computed_key() {
    let words = json(j!(["apple", "avocado", "banana"]));
    let groups = group_by_with(&words, |word| {
        word.as_text()
            .and_then(|w| w.chars().next())
            .map(String::from)
            .unwrap_or_default()
    })
    .unwrap();
    assert_eq!(Value::Map(groups), json(j!({"a": ["apple", "avocado"], "b": ["banana"]})));
}

#[test]
fn test_sequence_operations_reject_other_kinds() {
    let not_a_list = json(j!({"a": 1}));

    let err = group_by(&not_a_list, "a").unwrap_err();
    assert_eq!(err.to_string(), "Input must be an array");
    assert!(err.is_type_error());
    assert_eq!(err.operation(), Some("group_by"));

    let err = sort_by(&Value::from("abc"), &["a"], &[]).unwrap_err();
    assert_eq!(
        err,
        TransformError::NotASequence {
            operation: "sort_by",
            actual: "text"
        }
    );

    let err: shapekit::Error = chunk(&Value::Null, 2).unwrap_err().into();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "transform");
}

// ===== SORT BY =====

#[test]
fn test_sort_by_is_case_insensitive() {
    let data = json(j!([{"n": "Bob", "a": 30}, {"n": "amy", "a": 30}]));
    let sorted = sort_by(&data, &["n"], &[Order::from("asc")]).unwrap();
    let ordered: Vec<_> = sorted.iter().map(|p| p.as_map().unwrap()["n"].clone()).collect();
    assert_eq!(ordered, vec![Value::from("amy"), Value::from("Bob")]);
}

#[test]
fn test_sort_by_multiple_keys() {
    let sorted = sort_by(
        &people(),
        &["age", "name"],
        &[Order::Descending, Order::Ascending],
    )
    .unwrap();
    assert_eq!(names(&sorted), vec!["dan", "amy", "Bob", "Cleo"]);
}

#[test]
fn test_sort_by_is_stable() {
    let sorted = sort_by(&people(), &["age"], &[]).unwrap();
    // Bob and amy tie on age and keep their input order.
    assert_eq!(names(&sorted), vec!["Cleo", "Bob", "amy", "dan"]);
}

#[test]
fn test_sort_by_keeps_order_of_signed_zeros() {
    let data = Value::List(vec![
        [("n", Value::from(0)), ("id", Value::from("a"))].into_iter().collect(),
        [("n", Value::from(-0.0)), ("id", Value::from("b"))].into_iter().collect(),
        [("n", Value::from(f64::NAN)), ("id", Value::from("c"))].into_iter().collect(),
        [("n", Value::from(-1)), ("id", Value::from("d"))].into_iter().collect(),
    ]);
    let ids = |sorted: Vec<Value>| -> Vec<String> {
        sorted
            .iter()
            .map(|record| record.as_map().unwrap()["id"].to_string())
            .collect()
    };

    let ascending = sort_by(&data, &["n"], &[Order::Ascending]).unwrap();
    assert_eq!(ids(ascending), vec!["d", "a", "b", "c"]);

    let descending = sort_by(&data, &["n"], &[Order::Descending]).unwrap();
    assert_eq!(ids(descending), vec!["c", "a", "b", "d"]);
}

#[test]
fn test_sort_by_missing_key_sorts_first() {
    let sorted = sort_by(&people(), &["team"], &[]).unwrap();
    assert_eq!(names(&sorted), vec!["dan", "amy", "Bob", "Cleo"]);
}

#[test]
fn test_order_parsing() {
    assert_eq!(Order::from("DESC"), Order::Descending);
    assert_eq!(Order::from("descending"), Order::Descending);
    assert_eq!(Order::from("asc"), Order::Ascending);
    assert_eq!(Order::from("sideways"), Order::Ascending);
}

// ===== SEQUENCE HELPERS =====

#[test]
fn test_chunk() {
    let data = json(j!([1, 2, 3, 4, 5]));
    let chunks = chunk(&data, 2).unwrap();
    assert_eq!(Value::List(chunks), json(j!([[1, 2], [3, 4], [5]])));
    assert!(chunk(&data, 0).unwrap().is_empty());
}

#[test]
fn test_unique_uses_structural_equality() {
    let data = json(j!([{"a": 1, "b": 2}, 1, {"b": 2, "a": 1}, 1, "1"]));
    assert_eq!(
        Value::List(unique(&data).unwrap()),
        json(j!([{"a": 1, "b": 2}, 1, "1"]))
    );

    let nans = Value::List(vec![
        Value::from(f64::NAN),
        Value::from(f64::NAN),
        Value::List(vec![Value::from(f64::NAN)]),
        Value::List(vec![Value::from(f64::NAN)]),
    ]);
    let deduped = unique(&nans).unwrap();
    assert_eq!(deduped.len(), 2);
    assert!(deduped[0].as_number().is_some_and(f64::is_nan));
}

#[test]
fn test_shuffle_keeps_elements() {
    let data = json(j!([1, 2, 3, 4, 5, 6, 7, 8]));
    let mut rng = StdRng::seed_from_u64(7);
    let mut shuffled = shuffle(&data, &mut rng).unwrap();
    assert_eq!(shuffled.len(), 8);

    shuffled.sort_by(shapekit::transform::compare_values);
    assert_eq!(Value::List(shuffled), data);
}
