#![deny(missing_docs)]

//! # Required Data Extraction
//!
//! Projects a parsed document down to the four top-level sections a converter
//! reads, filling in empty defaults for the optional ones.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The sections of a document needed for conversion. Exactly four keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredData {
    /// The Info Object, copied as-is.
    pub info: Value,
    /// `paths`, or `{}` when absent.
    pub paths: Value,
    /// `webhooks` as declared, or `[]` when absent.
    pub webhooks: Value,
    /// `components`, or `{}` when absent.
    pub components: Value,
}

/// Extracts [`RequiredData`] from a document that already passed `parse_spec`.
///
/// A missing section is treated as absent, never as an error. A declared
/// `webhooks` mapping is passed through unchanged; only a missing one becomes
/// an empty sequence. The input is not modified.
pub fn get_required_data(document: &Value) -> RequiredData {
    debug_assert!(
        document.get("info").is_some(),
        "get_required_data called on a document without an info object"
    );

    let section = |key: &str| document.get(key).cloned();

    RequiredData {
        info: section("info").unwrap_or(Value::Null),
        paths: section("paths").unwrap_or_else(|| Value::Object(Map::new())),
        webhooks: section("webhooks").unwrap_or_else(|| Value::Array(Vec::new())),
        components: section("components").unwrap_or_else(|| Value::Object(Map::new())),
    }
}
