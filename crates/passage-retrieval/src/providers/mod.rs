//! Embedding providers
//!
//! The pipeline consumes embeddings through the [`EmbeddingProvider`]
//! trait; anything that maps text to fixed-dimension vectors can plug in.

mod embedding;
mod hashing;
mod ollama;

pub use embedding::{checked_embed_batch, EmbeddingProvider};
pub use hashing::HashingEmbedder;
pub use ollama::OllamaEmbedder;
