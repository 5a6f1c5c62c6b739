//! Greedy sentence-accumulating text chunker
//!
//! Sentence units come from splitting on the literal `". "` delimiter.
//! That heuristic misfires on abbreviations and decimal numbers; it is a
//! documented limitation of the chunking contract, not of this
//! implementation.

use crate::config::ChunkingConfig;
use crate::types::Chunk;

/// Splits raw document text into chunks bounded by a word budget.
#[derive(Debug, Clone)]
pub struct TextChunker {
    /// Word budget per chunk
    max_tokens: usize,
}

impl TextChunker {
    /// Create a chunker with the given word budget
    pub fn new(max_tokens: usize) -> Self {
        Self { max_tokens }
    }

    /// Create a chunker from configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.max_tokens)
    }

    /// Word budget this chunker enforces
    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    /// Split `text` into bounded chunks.
    ///
    /// Sentences accumulate greedily: a sentence joins the current chunk
    /// while the combined word count stays strictly below the budget;
    /// otherwise the chunk is sealed and the sentence starts a new one.
    /// A single sentence over the budget still becomes its own chunk —
    /// the rule never splits inside a sentence. Empty input produces no
    /// chunks.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = Vec::new();
        let mut buffer = String::new();

        for sentence in text.split(". ") {
            if sentence.trim().is_empty() {
                continue;
            }

            let buffer_words = buffer.split_whitespace().count();
            let sentence_words = sentence.split_whitespace().count();

            if !buffer.is_empty() && buffer_words + sentence_words >= self.max_tokens {
                self.seal(&mut chunks, &mut buffer);
            }

            buffer.push_str(sentence);
            buffer.push_str(". ");
        }

        if !buffer.trim().is_empty() {
            self.seal(&mut chunks, &mut buffer);
        }

        chunks
    }

    /// Trim the buffer into a chunk and reset it
    fn seal(&self, chunks: &mut Vec<Chunk>, buffer: &mut String) {
        let text = buffer.trim().to_string();
        chunks.push(Chunk::new(chunks.len() as u32, text));
        buffer.clear();
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::from_config(&ChunkingConfig::default())
    }
}
