//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::Display;

/// The Global Error Enum.
///
/// The `Display` text of `InvalidFormat` and `MissingInfoObject` is matched
/// literally by callers and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    /// Neither decoder accepted the input, or it did not decode to a mapping.
    #[display("Invalid format. Input must be in YAML or JSON format.")]
    InvalidFormat,

    /// The decoded document has no top-level `info` key.
    #[display("Specification must contain an Info Object for the meta-data of the API")]
    MissingInfoObject,

    /// A single decoder strategy rejected the input.
    #[display("Decode Error: {_0}")]
    Decode(String),

    /// Invalid `CompatOptions`.
    #[display("Config Error: {_0}")]
    Config(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
