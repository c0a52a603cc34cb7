#![deny(missing_docs)]

//! # Document Decoding
//!
//! Turns raw specification text into a `serde_json::Value` tree. Decoders are
//! tried in a fixed order (JSON first, then YAML) and the first success wins.
//! JSON goes first so that malformed JSON is never accepted as a YAML scalar.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// Serialization formats a document may arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// JSON text.
    Json,
    /// YAML text (a superset of JSON).
    Yaml,
}

impl DocumentFormat {
    /// Returns the decoder strategy for this format.
    pub fn decoder(self) -> &'static dyn DocumentDecoder {
        match self {
            DocumentFormat::Json => &JsonDecoder,
            DocumentFormat::Yaml => &YamlDecoder,
        }
    }
}

/// A single decoding strategy.
pub trait DocumentDecoder: Send + Sync {
    /// The format this decoder understands.
    fn format(&self) -> DocumentFormat;

    /// Decodes the whole input or fails. No partial results.
    fn decode(&self, raw: &str) -> AppResult<Value>;
}

/// Decodes JSON text with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl DocumentDecoder for JsonDecoder {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn decode(&self, raw: &str) -> AppResult<Value> {
        serde_json::from_str(raw).map_err(|e| AppError::Decode(format!("JSON: {}", e)))
    }
}

/// Decodes YAML text with `serde_yaml`.
///
/// The text is read into a `serde_yaml::Value` first so merge keys can be
/// applied; integer mapping keys such as `200:` become `"200"` on conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDecoder;

impl DocumentDecoder for YamlDecoder {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Yaml
    }

    fn decode(&self, raw: &str) -> AppResult<Value> {
        let mut yaml: serde_yaml::Value =
            serde_yaml::from_str(raw).map_err(|e| AppError::Decode(format!("YAML: {}", e)))?;
        yaml.apply_merge()
            .map_err(|e| AppError::Decode(format!("YAML merge: {}", e)))?;
        serde_json::to_value(yaml)
            .map_err(|e| AppError::Decode(format!("YAML to JSON: {}", e)))
    }
}

/// Runs each format's decoder in order and returns the first mapping produced.
///
/// A decoder that succeeds with a non-mapping value (a bare scalar, a sequence,
/// an empty YAML stream) counts as a failure and the next decoder is tried.
/// When nothing yields a mapping the result is `AppError::InvalidFormat`.
pub fn decode_document(raw: &str, formats: &[DocumentFormat]) -> AppResult<Value> {
    for decoder in formats.iter().map(|format| format.decoder()) {
        let format = decoder.format();
        match decoder.decode(raw) {
            Ok(value) if value.is_object() => {
                debug!(?format, "decoded specification");
                return Ok(value);
            }
            Ok(value) => {
                trace!(?format, kind = value_kind(&value), "decoded to a non-mapping value");
            }
            Err(e) => {
                trace!(?format, error = %e, "decoder rejected input");
            }
        }
    }
    Err(AppError::InvalidFormat)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
