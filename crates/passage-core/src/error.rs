//! Error types for the similarity index

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Similarity index errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// Query against an index with no stored vectors
    #[error("similarity index is empty")]
    EmptyIndex,

    /// Vector dimensionality does not match the index
    #[error("dimension mismatch: index holds {expected}-dimensional vectors, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
