//! Error types for static-comments

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for static-comments
#[derive(Debug, Error)]
pub enum StaticCommentsError {
    /// A mandatory metadata field is absent
    #[error("Missing metadata '{field}' in {}", .path.display())]
    MissingMetadata { field: String, path: PathBuf },

    /// A date value could not be parsed
    #[error("Invalid date '{value}': expected RFC 3339 or YYYY-MM-DD[ HH:MM[:SS]]")]
    InvalidDate { value: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<StaticCommentsError>,
    },
}

impl StaticCommentsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        StaticCommentsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check whether this error (or the error it wraps) is a missing metadata error
    pub fn is_missing_metadata(&self) -> bool {
        match self {
            StaticCommentsError::MissingMetadata { .. } => true,
            StaticCommentsError::WithContext { source, .. } => source.is_missing_metadata(),
            _ => false,
        }
    }
}

/// Result type alias for static-comments
pub type Result<T> = std::result::Result<T, StaticCommentsError>;
