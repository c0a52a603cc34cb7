#![deny(missing_docs)]

//! # OpenAPI Validation
//!
//! The only structural requirement checked at ingestion time: the document is
//! a mapping with a top-level `info` key. Everything deeper is left to later
//! stages.

use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Validates that a decoded document is a mapping carrying an `info` key.
pub fn validate_info_object(document: &Value) -> AppResult<()> {
    match document.as_object() {
        Some(root) if root.contains_key("info") => Ok(()),
        _ => Err(AppError::MissingInfoObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_info_present() {
        let doc = json!({ "openapi": "3.1.0", "info": { "title": "T", "version": "1" } });
        assert!(validate_info_object(&doc).is_ok());
    }

    #[test]
    fn test_info_missing() {
        let doc = json!({ "openapi": "3.1.0", "paths": {} });
        assert_eq!(
            validate_info_object(&doc).unwrap_err(),
            AppError::MissingInfoObject
        );
    }

    #[test]
    fn test_non_mapping_root() {
        assert_eq!(
            validate_info_object(&json!(["info"])).unwrap_err(),
            AppError::MissingInfoObject
        );
    }

    #[test]
    fn test_null_info_still_counts_as_present() {
        // Presence of the key is all that is checked here.
        assert!(validate_info_object(&json!({ "info": null })).is_ok());
    }
}
