//! Core error types for switchwise-core.
//!
//! The engine itself degrades "not found" conditions to placeholders, so
//! errors only arise at the edges: validating offer rows handed over by the
//! pricing catalog, loading snapshot files, and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for switchwise-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot file could not be read or decoded
    #[error("Failed to load snapshot from {path}: {message}")]
    Snapshot { path: PathBuf, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for caller-supplied records.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A field carries a value the engine cannot rank with
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// A catalog code that has no closed-enum counterpart
    #[error("Unknown code '{code}' for '{field}'")]
    UnknownCode { field: String, code: String },

    /// A snapshot row failed validation
    #[error("Offer row {index} rejected: {source}")]
    InvalidRow {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending field, looking through row wrappers.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidValue { field, .. } => field,
            ValidationError::UnknownCode { field, .. } => field,
            ValidationError::InvalidRow { source, .. } => source.field(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
