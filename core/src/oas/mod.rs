#![deny(missing_docs)]

//! # OpenAPI 3.1 Compatibility
//!
//! - **decode**: JSON-then-YAML decoding of raw specification text.
//! - **validation**: The `info` object precondition.
//! - **document**: The `parse_spec` ingestion gate.
//! - **required**: Projection onto `info`, `paths`, `webhooks`, `components`.
//! - **types**: Scalar/union `type` comparison.
//! - **normalization**: `examples` -> `example` rewriting.
//! - **content**: Binary media type classification.
//! - **refs**: `$ref` sibling keywords.
//! - **version**: `openapi` version detection.

pub mod content;
pub mod decode;
pub mod document;
pub mod normalization;
pub mod refs;
pub mod required;
pub mod types;
pub mod validation;
pub mod version;

pub use content::is_binary_content_type;
pub use decode::{decode_document, DocumentDecoder, DocumentFormat, JsonDecoder, YamlDecoder};
pub use document::{parse_spec, parse_spec_with_options, ParseOutcome};
pub use normalization::{fix_examples_by_version, fix_examples_with_options};
pub use refs::{merge_ref_siblings, ref_sibling_properties};
pub use required::{get_required_data, RequiredData};
pub use types::{compare_types, schema_has_type, SchemaType};
pub use validation::validate_info_object;
pub use version::OpenApiVersion;
