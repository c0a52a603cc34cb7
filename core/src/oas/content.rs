#![deny(missing_docs)]

//! # Content Classification
//!
//! Decides whether a media type entry in a Content map (request body or
//! response) carries an opaque binary payload.

use serde_json::{Map, Value};

/// Returns true when `content[media_type]` exists and declares no `schema`.
///
/// An entry such as `application/octet-stream: {}` is a binary payload. Any
/// entry with a `schema` key is not, whatever the schema says. The media type
/// string itself is not inspected, and a missing entry is never binary.
pub fn is_binary_content_type(media_type: &str, content: &Map<String, Value>) -> bool {
    content
        .get(media_type)
        .and_then(Value::as_object)
        .is_some_and(|entry| !entry.contains_key("schema"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("content map must be an object"),
        }
    }

    #[test]
    fn test_octet_stream_without_schema() {
        let content = content_map(json!({ "application/octet-stream": {} }));
        assert!(is_binary_content_type("application/octet-stream", &content));
    }

    #[test]
    fn test_entry_with_schema() {
        let content = content_map(json!({
            "application/json": { "schema": { "type": "string", "examples": ["OK"] } }
        }));
        assert!(!is_binary_content_type("application/json", &content));
    }

    #[test]
    fn test_binary_format_schema_still_false() {
        let content = content_map(json!({
            "image/png": { "schema": { "type": "string", "format": "binary" } }
        }));
        assert!(!is_binary_content_type("image/png", &content));
    }

    #[test]
    fn test_missing_media_type() {
        let content = content_map(json!({ "application/json": {} }));
        assert!(!is_binary_content_type("application/octet-stream", &content));
    }

    #[test]
    fn test_no_prefix_heuristics() {
        // Classification is by schema presence only.
        let content = content_map(json!({ "text/plain": { "example": "hi" } }));
        assert!(is_binary_content_type("text/plain", &content));
    }
}
