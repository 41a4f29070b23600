use std::sync::atomic::{AtomicU64, Ordering};

use shapekit::{Clock, Value};

/// Builds a [`Value`] from a `serde_json::json!` literal.
pub fn json(literal: serde_json::Value) -> Value {
    Value::from(literal)
}

/// The user records most sorting and grouping tests run against.
pub fn people() -> Value {
    json(serde_json::json!([
        {"name": "Bob", "age": 30, "team": "red"},
        {"name": "amy", "age": 30, "team": "blue"},
        {"name": "Cleo", "age": 25, "team": "red"},
        {"name": "dan", "age": 41},
    ]))
}

/// Names of a sequence of records, in order.
pub fn names(records: &[Value]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            record
                .as_map()
                .and_then(|entries| entries.get("name"))
                .and_then(Value::as_text)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// Clock driven by hand from tests.
#[derive(Debug, Default)]
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn at(millis: u64) -> Self {
        Self(AtomicU64::new(millis))
    }

    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}
