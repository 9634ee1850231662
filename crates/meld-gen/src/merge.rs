//! Recursive deep-merge over JSON-like values.

use serde_json::{Map, Value};

/// Merge `overrides` onto `base`, override-wins.
///
/// Recursion happens only where both sides hold plain objects; any other
/// pairing (scalar, array, or mixed) is a full replacement by the override
/// value. Arrays are never concatenated.
pub fn deep_merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in override_map {
                let next = match merged.get(key) {
                    Some(current @ Value::Object(_)) if value.is_object() => {
                        deep_merge(current, value)
                    }
                    _ => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        _ => overrides.clone(),
    }
}

/// Apply an agent's optional `overrides` object onto generated settings.
pub fn apply_overrides(settings: Value, overrides: Option<&Map<String, Value>>) -> Value {
    match overrides {
        Some(map) => deep_merge(&settings, &Value::Object(map.clone())),
        None => settings,
    }
}
