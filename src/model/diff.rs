//! Shallow field diff between two JSON objects.

use serde::Serialize;
use serde_json::{Map, Value};

/// Keys of `updated` whose values differ from `original`.
///
/// Comparison is strict per top-level key; nested objects are compared as
/// whole values. Keys only present in `original` are ignored. Returns
/// `None` when nothing changed.
pub fn extract_changed_fields(
    original: &Map<String, Value>,
    updated: &Map<String, Value>,
) -> Option<Map<String, Value>> {
    let diff: Map<String, Value> = updated
        .iter()
        .filter(|(key, value)| original.get(key.as_str()) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    (!diff.is_empty()).then_some(diff)
}

/// [`extract_changed_fields`] over any two serializable values.
///
/// Values that do not serialize to JSON objects are treated as empty.
pub fn changed_fields<T: Serialize>(original: &T, updated: &T) -> Option<Map<String, Value>> {
    extract_changed_fields(&as_object(original), &as_object(updated))
}

fn as_object<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
