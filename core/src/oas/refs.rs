#![deny(missing_docs)]

//! # Reference Siblings
//!
//! In OpenAPI 3.1 a Schema Object may place keywords next to `$ref`
//! (`description`, `example`, ...). In 3.0 such siblings were ignored. These
//! helpers lift the siblings off a reference and lay them over whatever the
//! reference resolved to. Resolving the reference is the caller's job.

use serde_json::{Map, Value};

/// Returns every key of a `$ref` schema except `$ref` itself, in order.
///
/// Returns an empty map for non-mappings and for schemas without `$ref`.
pub fn ref_sibling_properties(schema: &Value) -> Map<String, Value> {
    match schema.as_object() {
        Some(map) if map.contains_key("$ref") => map
            .iter()
            .filter(|(key, _)| key.as_str() != "$ref")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => Map::new(),
    }
}

/// Overlays `siblings` onto an already resolved schema. Siblings win.
///
/// A non-mapping `resolved` value (e.g. a boolean schema) is returned as-is
/// when there is nothing to overlay.
pub fn merge_ref_siblings(resolved: &Value, siblings: &Map<String, Value>) -> Value {
    if siblings.is_empty() {
        return resolved.clone();
    }
    debug_assert!(
        matches!(resolved, Value::Object(_) | Value::Bool(true)),
        "cannot merge $ref siblings into {}",
        resolved
    );

    let mut merged = match resolved {
        Value::Object(map) => map.clone(),
        Value::Bool(true) => Map::new(),
        other => return other.clone(),
    };
    for (key, value) in siblings {
        merged.insert(key.clone(), value.clone());
    }
    Value::Object(merged)
}
