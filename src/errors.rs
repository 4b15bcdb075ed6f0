//! Error types for sentence_rank
//!
//! Summarization itself never fails: degenerate documents and numeric
//! corner cases are resolved by fallbacks inside the pipeline. Errors only
//! come from loading or validating configuration.

use thiserror::Error;

/// Result type alias for fallible sentence_rank operations.
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum TextRankError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextRankError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
