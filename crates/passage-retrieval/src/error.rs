//! Error types for the retrieval pipeline

use thiserror::Error;

/// Result type alias for retrieval operations
pub type Result<T> = std::result::Result<T, Error>;

/// Retrieval pipeline errors
///
/// A query whose best score falls under the confidence threshold is NOT an
/// error: it is the normal [`crate::types::Answer::NoMatch`] outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// Chunking produced zero chunks (empty or whitespace-only document)
    #[error("document produced no chunks")]
    EmptyDocument,

    /// Retrieval attempted before any document was loaded
    #[error("no document loaded")]
    NoDocumentLoaded,

    /// Embedding provider failed, or returned vectors that do not line up
    /// positionally with its input
    #[error("embedding generation failed: {0}")]
    Embedding(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Similarity index error
    #[error("similarity index error: {0}")]
    Core(#[from] passage_core::CoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
