#![deny(missing_docs)]

//! # Schema Type Comparison
//!
//! OpenAPI 3.1 lets a schema's `type` be a single name or a list of names
//! (`["string", "null"]`). `SchemaType` captures both shapes once at the
//! boundary so comparisons do not branch on raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A schema's declared `type` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `type: string`
    Single(String),
    /// `type: [string, "null"]`
    Union(Vec<String>),
}

impl SchemaType {
    /// Reads a `type` keyword value.
    ///
    /// Returns `None` for anything other than a string or a list of strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(SchemaType::Single(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(SchemaType::Union),
            _ => None,
        }
    }

    /// True when `name` is one of the declared type names.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            SchemaType::Single(s) => s == name,
            SchemaType::Union(names) => names.iter().any(|n| n == name),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(s: &str) -> Self {
        SchemaType::Single(s.to_string())
    }
}

impl From<Vec<&str>> for SchemaType {
    fn from(names: Vec<&str>) -> Self {
        SchemaType::Union(names.into_iter().map(str::to_string).collect())
    }
}

/// Checks whether `type_to_compare` is one of the names in `type_in_spec`.
///
/// Exact string membership: `integer` does not match `number`, order and
/// duplicates in a union do not matter.
pub fn compare_types(type_in_spec: &SchemaType, type_to_compare: &str) -> bool {
    type_in_spec.contains(type_to_compare)
}

/// Checks the `type` keyword of a schema object against `expected`.
///
/// A missing or malformed `type` never matches.
pub fn schema_has_type(schema: &Value, expected: &str) -> bool {
    schema
        .get("type")
        .and_then(SchemaType::from_value)
        .is_some_and(|declared| compare_types(&declared, expected))
}
