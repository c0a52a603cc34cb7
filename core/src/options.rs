#![deny(missing_docs)]

//! # Compatibility Options
//!
//! Tunables for document ingestion and schema normalization. The struct is
//! serde-enabled so it can sit inside a caller's own configuration, e.g.
//!
//! ```yaml
//! formats: [json, yaml]
//! maxSchemaDepth: 32
//! ```

use crate::error::{AppError, AppResult};
use crate::oas::decode::DocumentFormat;
use serde::{Deserialize, Serialize};

/// Default recursion limit for the example normalizer.
pub const DEFAULT_MAX_SCHEMA_DEPTH: usize = 64;

/// Options shared by the parser and the schema normalizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CompatOptions {
    /// Decoder strategies, tried in order. The first success wins.
    pub formats: Vec<DocumentFormat>,
    /// Nesting depth below the root schema that the example normalizer visits.
    pub max_schema_depth: usize,
}

impl Default for CompatOptions {
    fn default() -> Self {
        Self {
            formats: vec![DocumentFormat::Json, DocumentFormat::Yaml],
            max_schema_depth: DEFAULT_MAX_SCHEMA_DEPTH,
        }
    }
}

impl CompatOptions {
    /// Checks that at least one decoder is configured and the depth limit is usable.
    pub fn validate(&self) -> AppResult<()> {
        if self.formats.is_empty() {
            return Err(AppError::Config("formats must not be empty".into()));
        }
        if self.max_schema_depth == 0 {
            return Err(AppError::Config("maxSchemaDepth must be at least 1".into()));
        }
        Ok(())
    }
}
