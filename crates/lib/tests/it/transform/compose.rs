use shapekit::{
    Value,
    transform::{Step, deep_merge, pipe, set},
};

#[test]
fn test_pipe_applies_left_to_right() {
    let steps: Vec<Step<'_, String>> = vec![
        Box::new(|s| format!("{s}a")),
        Box::new(|s| format!("{s}b")),
        Box::new(|s| s.to_uppercase()),
    ];
    assert_eq!(pipe(steps)("x".to_string()), "XAB");
}

#[test]
fn test_empty_pipe_is_identity() {
    let identity = pipe::<i32>(Vec::new());
    assert_eq!(identity(41), 41);
}

#[test]
fn test_pipe_over_values() {
    let defaults = Value::from_json_str(r#"{"theme": "light", "size": 12}"#).unwrap();
    let steps: Vec<Step<'_, Value>> = vec![
        Box::new(|v| deep_merge(&defaults, &v)),
        Box::new(|mut v| {
            set(&mut v, "loaded", true);
            v
        }),
    ];
    let configure = pipe(steps);

    let result = configure(Value::from_json_str(r#"{"size": 14}"#).unwrap());
    assert_eq!(
        result,
        Value::from_json_str(r#"{"theme": "light", "size": 14, "loaded": true}"#).unwrap()
    );
}
