//! Error types for the diarisk inference pipeline

use thiserror::Error;

/// Result type alias for diarisk operations
pub type Result<T> = std::result::Result<T, DiariskError>;

/// Main error type for the inference pipeline
///
/// Every failure propagates to the caller; there is no local recovery
/// anywhere in the core.
#[derive(Error, Debug)]
pub enum DiariskError {
    #[error("Artifact error: {0}")]
    ArtifactError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),
}

impl From<serde_json::Error> for DiariskError {
    fn from(err: serde_json::Error) -> Self {
        DiariskError::SerializationError(err.to_string())
    }
}
