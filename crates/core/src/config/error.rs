//! Error types for configuration loading.
//!
//! Loading is the only fallible step: once a document is parsed, every
//! lookup reports absence through `Option` or an empty value instead.

use thiserror::Error;

/// Errors that can occur while loading the pipeline document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested file is not part of the embedded assets.
    #[error("Embedded asset not found: {0}")]
    AssetNotFound(String),

    /// The document is not valid JSON or does not match the expected shape.
    #[error("Failed to parse JSON document {source_name}: {source}")]
    JsonParse {
        source_name: String,
        source: serde_json::Error,
    },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
