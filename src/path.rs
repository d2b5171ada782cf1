//! Dotted-path access into nested settings trees
//!
//! A path such as `d.e.1.e` is split on `.` and each segment addresses
//! either a mapping key or, while reading, a sequence index:
//! - Mappings: looked up by key (empty segments are the key `""`)
//! - Sequences: indexed by all-digit segments, reads only
//! - Writes only ever walk and create mappings

use serde_json::{Map, Value};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Get a value by dotted path.
///
/// Returns `None` when any segment cannot be resolved. A key that is present
/// with a `null` value yields `Some(&Value::Null)`.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split(SEPARATOR) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value by dotted path.
///
/// Follows the same resolution rules as [`get`].
pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let mut current = root;
    for segment in path.split(SEPARATOR) {
        current = match current {
            Value::Object(map) => map.get_mut(segment)?,
            Value::Array(items) => items.get_mut(parse_index(segment)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Set a value by dotted path, creating intermediate mappings as needed.
///
/// Any intermediate value that is not a mapping (scalars and sequences
/// included) is replaced by an empty mapping. Numeric segments are plain
/// keys here. Never fails.
pub fn set(root: &mut Value, path: &str, value: Value) {
    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    // split always yields at least one segment
    let leaf = segments.pop().unwrap_or_default();

    let mut current = ensure_object(root);
    for segment in segments {
        let child = current
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()));
        current = ensure_object(child);
    }

    current.insert(leaf.to_string(), value);
}

/// Turn `value` into a mapping if it is not one already and borrow it.
fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced by an object"),
    }
}

/// Parse a sequence index: ASCII digits only, no sign or whitespace.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
