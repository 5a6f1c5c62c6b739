//! Offline embedding via feature hashing
//!
//! Hashes each token to a fixed bucket and L2-normalizes the resulting
//! term-frequency vector. No vocabulary state, so the same text always
//! produces the same vector. Captures lexical overlap only, not meaning;
//! useful for tests and for running without an embedding server.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::Result;

use super::embedding::EmbeddingProvider;

/// Default dimensionality of hashed embeddings
pub const DEFAULT_HASHING_DIM: usize = 256;

/// Deterministic feature-hashing embedder
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    /// Create an embedder producing vectors of the given dimensionality
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a token to a bucket index in `[0, dimensions)`
    fn bucket(&self, token: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimensions
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_HASHING_DIM)
    }
}

impl EmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let mut tf = vec![0.0f32; self.dimensions];

        if tokens.is_empty() {
            return Ok(tf);
        }

        for token in &tokens {
            tf[self.bucket(token)] += 1.0;
        }

        let norm: f32 = tf.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut tf {
                *x /= norm;
            }
        }

        Ok(tf)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_core::cosine_similarity;

    #[test]
    fn embedding_has_configured_dimension() {
        let embedder = HashingEmbedder::default();
        let v = embedder.embed("hello world").unwrap();
        assert_eq!(v.len(), DEFAULT_HASHING_DIM);
    }

    #[test]
    fn embedding_is_deterministic() {
        let embedder = HashingEmbedder::default();
        let a = embedder.embed("the quick brown fox").unwrap();
        let _ = embedder.embed("completely unrelated words").unwrap();
        let b = embedder.embed("the quick brown fox").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let embedder = HashingEmbedder::new(16);
        let v = embedder.embed("   ").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn shared_vocabulary_scores_higher() {
        let embedder = HashingEmbedder::default();
        let doc = embedder.embed("cats are small animals").unwrap();
        let related = embedder.embed("what animals are cats").unwrap();
        let unrelated = embedder.embed("quantum flux capacitor").unwrap();

        assert!(
            cosine_similarity(&doc, &related) > cosine_similarity(&doc, &unrelated)
        );
    }

    #[test]
    fn batch_preserves_order_and_count() {
        let embedder = HashingEmbedder::default();
        let texts = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let batch = embedder.embed_batch(&texts).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[1], embedder.embed("two").unwrap());
    }
}
