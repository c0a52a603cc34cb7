#![deny(missing_docs)]

//! # OpenAPI Normalization
//!
//! Rewrites OpenAPI 3.1 schemas into the shape 3.0-oriented code expects.
//! JSON Schema 2020-12 carries sample values in a plural `examples` array;
//! 3.0 consumers read the singular `example`. The rewrite copies the first
//! entry across and leaves the array in place.
//!
//! The traversal rebuilds the tree instead of mutating it, descending through
//! `properties` only. `items`, `oneOf` and friends are not visited.

use crate::options::CompatOptions;
use serde_json::{Map, Value};
use tracing::warn;

/// Populates `example` from `examples[0]` on the root schema and every nested
/// `properties` schema, using the default depth limit.
///
/// Nodes that already have `example`, or whose `examples` is missing, empty or
/// not an array, are copied unchanged. Key order is preserved and `example` is
/// appended after existing keys. Applying this twice equals applying it once.
pub fn fix_examples_by_version(schema: &Value) -> Value {
    fix_examples_with_options(schema, &CompatOptions::default())
}

/// Same as [`fix_examples_by_version`] with an explicit `maxSchemaDepth`.
///
/// Property schemas nested deeper than the limit are copied verbatim.
pub fn fix_examples_with_options(schema: &Value, options: &CompatOptions) -> Value {
    normalize_examples_node(schema, 0, options.max_schema_depth)
}

fn normalize_examples_node(node: &Value, depth: usize, max_depth: usize) -> Value {
    let map = match node {
        Value::Object(map) => map,
        // Boolean schemas and stray scalars carry nothing to fix.
        other => return other.clone(),
    };

    let mut out = Map::with_capacity(map.len() + 1);
    for (key, value) in map {
        let rebuilt = match (key.as_str(), value) {
            ("properties", Value::Object(props)) if depth < max_depth => Value::Object(
                props
                    .iter()
                    .map(|(name, prop)| {
                        (
                            name.clone(),
                            normalize_examples_node(prop, depth + 1, max_depth),
                        )
                    })
                    .collect(),
            ),
            ("properties", Value::Object(_)) => {
                warn!(depth, max_depth, "schema nesting limit reached, properties left as-is");
                value.clone()
            }
            _ => value.clone(),
        };
        out.insert(key.clone(), rebuilt);
    }

    if !out.contains_key("example") {
        if let Some(first) = first_example(map) {
            out.insert("example".to_string(), first.clone());
        }
    }

    Value::Object(out)
}

fn first_example(map: &Map<String, Value>) -> Option<&Value> {
    map.get("examples")?.as_array()?.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_examples() {
        let fixed = fix_examples_by_version(&json!({ "type": "string", "examples": ["a", "b"] }));
        assert_eq!(
            fixed,
            json!({ "type": "string", "examples": ["a", "b"], "example": "a" })
        );
    }

    #[test]
    fn test_existing_example_wins() {
        let schema = json!({ "type": "string", "examples": ["a"], "example": "z" });
        assert_eq!(fix_examples_by_version(&schema), schema);
    }

    #[test]
    fn test_empty_or_non_array_examples_untouched() {
        let empty = json!({ "type": "string", "examples": [] });
        assert_eq!(fix_examples_by_version(&empty), empty);

        let mapping = json!({ "examples": { "one": { "value": 1 } } });
        assert_eq!(fix_examples_by_version(&mapping), mapping);
    }

    #[test]
    fn test_nested_properties() {
        let schema = json!({
            "type": "object",
            "properties": {
                "owner": {
                    "type": "object",
                    "properties": {
                        "email": { "type": "string", "examples": ["a@b.c"] }
                    }
                }
            }
        });
        let fixed = fix_examples_by_version(&schema);
        assert_eq!(
            fixed["properties"]["owner"]["properties"]["email"]["example"],
            "a@b.c"
        );
        assert!(fixed["properties"]["owner"].get("example").is_none());
    }

    #[test]
    fn test_items_not_visited() {
        let schema = json!({
            "type": "array",
            "items": { "type": "string", "examples": ["x"] }
        });
        assert_eq!(fix_examples_by_version(&schema), schema);
    }

    #[test]
    fn test_boolean_property_schema() {
        let schema = json!({ "properties": { "any": true } });
        assert_eq!(fix_examples_by_version(&schema), schema);
    }

    #[test]
    fn test_input_not_mutated_and_idempotent() {
        let schema = json!({ "properties": { "n": { "examples": [1] } } });
        let before = schema.clone();
        let once = fix_examples_by_version(&schema);
        assert_eq!(schema, before);
        assert_eq!(fix_examples_by_version(&once), once);
    }

    #[test]
    fn test_depth_limit() {
        let schema = json!({
            "examples": [0],
            "properties": {
                "a": {
                    "examples": [1],
                    "properties": { "b": { "examples": [2] } }
                }
            }
        });
        let options = CompatOptions {
            max_schema_depth: 1,
            ..CompatOptions::default()
        };
        let fixed = fix_examples_with_options(&schema, &options);
        assert_eq!(fixed["example"], 0);
        assert_eq!(fixed["properties"]["a"]["example"], 1);
        assert!(fixed["properties"]["a"]["properties"]["b"].get("example").is_none());
    }
}
