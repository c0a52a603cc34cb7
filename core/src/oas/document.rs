#![deny(missing_docs)]

//! # OpenAPI Document Parsing
//!
//! Single ingestion gate: decode the raw text, check for the `info` object,
//! and hand back either the full document tree or one of two fixed reasons.
//! Failures are returned as values; nothing here panics on bad input.

use crate::error::{AppError, AppResult};
use crate::oas::decode::decode_document;
use crate::oas::validation::validate_info_object;
use crate::oas::version::OpenApiVersion;
use crate::options::CompatOptions;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::debug;

/// Result of [`parse_spec`].
///
/// Serializes as `{"result": true, "openapi": <document>}` or
/// `{"result": false, "reason": "<message>"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The full decoded document (not a projection).
    Parsed(Value),
    /// Either `AppError::InvalidFormat` or `AppError::MissingInfoObject`.
    Rejected(AppError),
}

impl ParseOutcome {
    /// True when the document was accepted.
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    /// The accepted document, if any.
    pub fn document(&self) -> Option<&Value> {
        match self {
            ParseOutcome::Parsed(doc) => Some(doc),
            ParseOutcome::Rejected(_) => None,
        }
    }

    /// The human-readable rejection reason, if any.
    pub fn reason(&self) -> Option<String> {
        match self {
            ParseOutcome::Parsed(_) => None,
            ParseOutcome::Rejected(err) => Some(err.to_string()),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> AppResult<Value> {
        match self {
            ParseOutcome::Parsed(doc) => Ok(doc),
            ParseOutcome::Rejected(err) => Err(err),
        }
    }
}

impl From<AppResult<Value>> for ParseOutcome {
    fn from(result: AppResult<Value>) -> Self {
        match result {
            Ok(doc) => ParseOutcome::Parsed(doc),
            Err(err) => ParseOutcome::Rejected(err),
        }
    }
}

impl Serialize for ParseOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            ParseOutcome::Parsed(doc) => {
                map.serialize_entry("result", &true)?;
                map.serialize_entry("openapi", doc)?;
            }
            ParseOutcome::Rejected(err) => {
                map.serialize_entry("result", &false)?;
                map.serialize_entry("reason", &err.to_string())?;
            }
        }
        map.end()
    }
}

/// Parses a raw OpenAPI specification (JSON or YAML) with default options.
///
/// # Arguments
///
/// * `raw` - The specification text.
///
/// # Returns
///
/// * `ParseOutcome` - The decoded document, or the reason it was rejected.
pub fn parse_spec(raw: &str) -> ParseOutcome {
    parse_spec_with_options(raw, &CompatOptions::default())
}

/// Parses a raw OpenAPI specification using the decoder order from `options`.
pub fn parse_spec_with_options(raw: &str, options: &CompatOptions) -> ParseOutcome {
    try_parse(raw, options).into()
}

fn try_parse(raw: &str, options: &CompatOptions) -> AppResult<Value> {
    // Any decoder detail collapses into the one canonical reason.
    let document = decode_document(raw, &options.formats).map_err(|_| AppError::InvalidFormat)?;
    validate_info_object(&document)?;

    match OpenApiVersion::detect(&document) {
        Some(version) => debug!(%version, "accepted specification"),
        None => debug!("accepted specification without an openapi version"),
    }
    Ok(document)
}
