//! passage-retrieval: extractive question answering over a single document
//!
//! Splits a document into bounded chunks, embeds them through a pluggable
//! provider, and answers questions with a two-stage nearest-match search:
//! chunk-level first, then sentence-level within the winning chunk. A
//! confidence threshold decides between a verbatim sentence and a fixed
//! no-answer sentinel. There is no generative synthesis anywhere.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod session;
pub mod types;

pub use config::RetrievalConfig;
pub use error::{Error, Result};
pub use ingestion::TextChunker;
pub use providers::{EmbeddingProvider, HashingEmbedder, OllamaEmbedder};
pub use retrieval::Resolver;
pub use session::SessionContext;
pub use types::{Answer, Chunk, Document, DocumentCorpus, NO_ANSWER_MESSAGE};

/// Re-export passage-core for convenience
pub use passage_core;
