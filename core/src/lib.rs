#![deny(missing_docs)]

//! # CDD OAS 3.1
//!
//! Normalization and compatibility layer that lets OpenAPI 3.0-oriented
//! converters consume OpenAPI 3.1 documents.

/// Shared error types.
pub mod error;

/// Parser and normalizer options.
pub mod options;

/// OpenAPI (OAS) 3.1 parsing and compatibility utilities.
pub mod oas;

pub use error::{AppError, AppResult};
pub use oas::{
    compare_types, fix_examples_by_version, fix_examples_with_options, get_required_data,
    is_binary_content_type, merge_ref_siblings, parse_spec, parse_spec_with_options,
    ref_sibling_properties, schema_has_type, DocumentFormat, OpenApiVersion, ParseOutcome,
    RequiredData, SchemaType,
};
pub use options::CompatOptions;
