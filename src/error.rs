//! Error types for equity-features

use thiserror::Error;

/// Main error type for the feature builder
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for feature builder operations
pub type Result<T> = std::result::Result<T, FeatureError>;
