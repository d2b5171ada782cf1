//! Settings merge logic
//!
//! Merges an overwrite tree into a defaults tree:
//! - Mappings: deep-merge by key (recursive)
//! - Sequences: REPLACE (overwrite wins entirely)
//! - Scalars: override (overwrite wins, null included)
//! - Mismatched kinds: overwrite wins

use serde_json::Value;

/// Deep merge `overwrite` into `defaults`.
///
/// Consumes `defaults` and reuses its storage for the result, so the
/// destructive behavior is visible in the signature. Use [`merged`] to keep
/// the inputs intact.
pub fn merge(defaults: Value, overwrite: Value) -> Value {
    match (defaults, overwrite) {
        // Both mappings: deep merge
        (Value::Object(mut merged), Value::Object(overwrite_map)) => {
            for (key, overwrite_value) in overwrite_map {
                let value = match merged.remove(&key) {
                    Some(default_value) => merge(default_value, overwrite_value),
                    None => overwrite_value,
                };
                merged.insert(key, value);
            }
            Value::Object(merged)
        }

        // Sequences, scalars and mismatches: overwrite wins
        (_, overwrite) => overwrite,
    }
}

/// Deep merge `overwrite` into `defaults` in place.
pub fn merge_into(defaults: &mut Value, overwrite: Value) {
    match (defaults, overwrite) {
        (Value::Object(merged), Value::Object(overwrite_map)) => {
            for (key, overwrite_value) in overwrite_map {
                match merged.get_mut(&key) {
                    Some(default_value) => merge_into(default_value, overwrite_value),
                    None => {
                        merged.insert(key, overwrite_value);
                    }
                }
            }
        }
        (defaults, overwrite) => *defaults = overwrite,
    }
}

/// Non-destructive merge: clones both inputs first.
pub fn merged(defaults: &Value, overwrite: &Value) -> Value {
    merge(defaults.clone(), overwrite.clone())
}
