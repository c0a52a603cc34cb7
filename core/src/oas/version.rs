#![deny(missing_docs)]

//! # OpenAPI Version Detection
//!
//! Reads the top-level `openapi` field so callers can pick 3.0 or 3.1 handling.

use serde_json::Value;
use std::fmt::Display;

/// The OpenAPI line a document declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenApiVersion {
    /// `3.0.x`
    V30,
    /// `3.1.x`
    V31,
    /// Any other version string, kept verbatim.
    Other(String),
}

impl OpenApiVersion {
    /// Detects the version from a decoded document.
    ///
    /// Returns `None` when `openapi` is missing or not a string.
    pub fn detect(document: &Value) -> Option<Self> {
        let raw = document.get("openapi")?.as_str()?;
        Some(Self::from_version_str(raw))
    }

    /// Classifies a raw version string such as `"3.1.0"`.
    pub fn from_version_str(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == "3.0" || trimmed.starts_with("3.0.") {
            OpenApiVersion::V30
        } else if trimmed == "3.1" || trimmed.starts_with("3.1.") {
            OpenApiVersion::V31
        } else {
            OpenApiVersion::Other(trimmed.to_string())
        }
    }

    /// True for the 3.1 line, where union `type` and `examples` arrays apply.
    pub fn is_31x(&self) -> bool {
        matches!(self, OpenApiVersion::V31)
    }
}

impl Display for OpenApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenApiVersion::V30 => write!(f, "3.0.x"),
            OpenApiVersion::V31 => write!(f, "3.1.x"),
            OpenApiVersion::Other(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_31() {
        let v = OpenApiVersion::detect(&json!({ "openapi": "3.1.0" })).unwrap();
        assert_eq!(v, OpenApiVersion::V31);
        assert!(v.is_31x());
        assert_eq!(v.to_string(), "3.1.x");
    }

    #[test]
    fn test_detect_30() {
        let v = OpenApiVersion::detect(&json!({ "openapi": "3.0.3" })).unwrap();
        assert_eq!(v, OpenApiVersion::V30);
        assert!(!v.is_31x());
    }

    #[test]
    fn test_detect_other() {
        let v = OpenApiVersion::detect(&json!({ "openapi": "3.2.0" })).unwrap();
        assert_eq!(v, OpenApiVersion::Other("3.2.0".into()));
        // 3.10 is not 3.1
        assert_eq!(
            OpenApiVersion::from_version_str("3.10.0"),
            OpenApiVersion::Other("3.10.0".into())
        );
    }

    #[test]
    fn test_detect_missing_or_wrong_type() {
        assert!(OpenApiVersion::detect(&json!({ "swagger": "2.0" })).is_none());
        assert!(OpenApiVersion::detect(&json!({ "openapi": 3.1 })).is_none());
    }
}
