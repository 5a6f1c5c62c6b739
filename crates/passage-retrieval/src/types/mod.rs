//! Document, chunk, corpus, and answer types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use passage_core::SimilarityIndex;

/// Fixed user-visible message returned when no sentence clears the
/// confidence threshold. Byte-stable across calls.
pub const NO_ANSWER_MESSAGE: &str =
    "Sorry, I couldn't find a relevant answer in the document.";

/// A bounded contiguous span of document text, the unit of chunk-level
/// similarity search. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Position within the document's chunk sequence
    pub index: u32,
    /// Chunk text: a run of sentences, whitespace-trimmed
    pub text: String,
    /// Whitespace-separated word count of `text`
    pub word_count: usize,
}

impl Chunk {
    /// Create a chunk, computing its word count
    pub fn new(index: u32, text: String) -> Self {
        let word_count = text.split_whitespace().count();
        Self {
            index,
            text,
            word_count,
        }
    }
}

/// Metadata for a loaded document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID
    pub id: Uuid,
    /// SHA-256 of the raw document text, hex encoded
    pub content_hash: String,
    /// Number of chunks produced from this document
    pub total_chunks: u32,
    /// Load timestamp
    pub loaded_at: DateTime<Utc>,
}

impl Document {
    /// Create metadata for freshly loaded document text
    pub fn new(text: &str, total_chunks: u32) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let content_hash = hex::encode(hasher.finalize());

        Self {
            id: Uuid::new_v4(),
            content_hash,
            total_chunks,
            loaded_at: Utc::now(),
        }
    }
}

/// The chunks and chunk-level embedding index for the active document.
///
/// Invariant: `chunks.len() == index.len()`, and position `i` in both
/// refers to the same chunk. Built in one piece by
/// [`crate::retrieval::Resolver::load`]; replacement is a by-value swap,
/// so a caller never observes a half-replaced corpus.
#[derive(Debug, Clone)]
pub struct DocumentCorpus {
    /// Document metadata
    pub document: Document,
    /// Ordered chunk sequence
    pub chunks: Vec<Chunk>,
    /// Chunk-level embedding index, parallel to `chunks`
    pub index: SimilarityIndex,
}

impl DocumentCorpus {
    /// Number of chunks in the corpus
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if the corpus holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Outcome of a single query: a verbatim sentence or the no-answer sentinel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    /// A sentence drawn verbatim from the winning chunk
    Sentence {
        /// The sentence text, untouched beyond sentence splitting
        text: String,
        /// Sentence-level cosine similarity against the query
        score: f32,
    },
    /// No sentence cleared the confidence threshold
    NoMatch,
}

impl Answer {
    /// User-visible message: the sentence itself, or the fixed sentinel
    pub fn message(&self) -> &str {
        match self {
            Answer::Sentence { text, .. } => text,
            Answer::NoMatch => NO_ANSWER_MESSAGE,
        }
    }

    /// Whether a sentence was found
    pub fn is_match(&self) -> bool {
        matches!(self, Answer::Sentence { .. })
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Speaker of a conversational turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of session history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who spoke
    pub role: ChatRole,
    /// What was said (for the assistant, the answer's message)
    pub content: String,
    /// When the turn was recorded
    pub timestamp: DateTime<Utc>,
}

impl ChatTurn {
    /// Record a turn with the current timestamp
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
