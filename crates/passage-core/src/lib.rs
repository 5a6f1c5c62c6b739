//! passage-core: in-memory cosine similarity index
//!
//! Holds fixed-dimension embedding vectors positionally and answers
//! single-best-match queries by exhaustive cosine comparison. Built for
//! single-document corpora where the vector count is small enough that a
//! linear scan beats any approximate index.

pub mod error;
pub mod index;
pub mod similarity;

pub use error::{CoreError, Result};
pub use index::SimilarityIndex;
pub use similarity::cosine_similarity;
