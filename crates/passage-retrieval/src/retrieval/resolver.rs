//! Two-stage relevance resolver
//!
//! Stage 1 finds the best-matching chunk over the corpus index; stage 2
//! splits that chunk into sentences, embeds them, and picks the best
//! sentence. Narrowing to one chunk first keeps the sentence-level
//! embedding cost bounded to a small, locally relevant set. A confidence
//! threshold gates the final answer.

use std::sync::Arc;

use passage_core::SimilarityIndex;

use crate::config::RetrievalConfig;
use crate::error::{Error, Result};
use crate::ingestion::TextChunker;
use crate::providers::{checked_embed_batch, EmbeddingProvider};
use crate::types::{Answer, Chunk, Document, DocumentCorpus};

use super::sentence::split_sentences;

/// Builds document corpora and answers queries against them.
///
/// The embedding provider is injected at construction and shared
/// read-only; the resolver itself holds no per-document state, so one
/// resolver can serve any number of session corpora.
pub struct Resolver {
    embedder: Arc<dyn EmbeddingProvider>,
    chunker: TextChunker,
    threshold: f32,
}

impl Resolver {
    /// Create a resolver with an injected embedding provider
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, config: &RetrievalConfig) -> Self {
        Self {
            embedder,
            chunker: TextChunker::from_config(&config.chunking),
            threshold: config.resolver.threshold,
        }
    }

    /// Configured default confidence threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Chunk and embed a document, producing a fully built corpus.
    ///
    /// Fails without side effects: the caller's previous corpus, if any,
    /// is only replaced once this returns `Ok`.
    pub fn load(&self, text: &str) -> Result<DocumentCorpus> {
        let chunks = self.chunker.chunk(text);
        if chunks.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let chunk_texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = checked_embed_batch(self.embedder.as_ref(), &chunk_texts)?;

        let index = SimilarityIndex::from_vectors(self.embedder.dimensions(), embeddings)?;
        let document = Document::new(text, chunks.len() as u32);

        tracing::info!(
            document_id = %document.id,
            chunks = chunks.len(),
            embedder = self.embedder.name(),
            "document loaded"
        );

        Ok(DocumentCorpus {
            document,
            chunks,
            index,
        })
    }

    /// Answer a query with the configured default threshold
    pub fn ask(&self, query: &str, corpus: &DocumentCorpus) -> Result<Answer> {
        self.resolve(query, corpus, self.threshold)
    }

    /// Two-stage search with a confidence gate.
    ///
    /// The gate is strict less-than: a best sentence score exactly equal
    /// to `threshold` is accepted.
    pub fn resolve(
        &self,
        query: &str,
        corpus: &DocumentCorpus,
        threshold: f32,
    ) -> Result<Answer> {
        if corpus.is_empty() {
            return Err(Error::EmptyDocument);
        }

        // The query is embedded once and reused for both stages
        let query_embedding = self.embedder.embed(query)?;

        let (chunk_idx, chunk_score) = corpus.index.best_match(&query_embedding)?;
        let winning_chunk = &corpus.chunks[chunk_idx];
        tracing::debug!(chunk_idx, chunk_score, "stage-1 winner");

        let (sentence, score) = self.best_sentence(&query_embedding, winning_chunk)?;
        tracing::debug!(score, threshold, "stage-2 winner");

        if score < threshold {
            return Ok(Answer::NoMatch);
        }

        Ok(Answer::Sentence {
            text: sentence,
            score,
        })
    }

    /// Stage 2: embed the chunk's sentences and pick the closest one.
    ///
    /// A single-sentence chunk still goes through here; the argmax is just
    /// trivial.
    fn best_sentence(&self, query_embedding: &[f32], chunk: &Chunk) -> Result<(String, f32)> {
        let sentences: Vec<String> = split_sentences(&chunk.text)
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        // Chunk text is non-empty by construction, so the splitter always
        // yields at least one sentence
        let embeddings = checked_embed_batch(self.embedder.as_ref(), &sentences)?;
        let index = SimilarityIndex::from_vectors(self.embedder.dimensions(), embeddings)?;

        let (best_idx, best_score) = index.best_match(query_embedding)?;
        Ok((sentences[best_idx].clone(), best_score))
    }
}
