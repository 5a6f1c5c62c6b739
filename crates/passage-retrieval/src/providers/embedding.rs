//! Embedding provider trait for generating text embeddings

use crate::error::{Error, Result};

/// Trait for generating text embeddings.
///
/// Implementations:
/// - [`crate::providers::OllamaEmbedder`]: local Ollama server
///   (nomic-embed-text)
/// - [`crate::providers::HashingEmbedder`]: deterministic offline
///   feature-hashing embedder
///
/// All methods are synchronous and run to completion; the pipeline never
/// suspends mid-computation.
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, one vector per input, same
    /// order.
    ///
    /// Default implementation calls `embed` sequentially.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text)?);
        }
        Ok(embeddings)
    }

    /// Embedding dimensionality (e.g., 768 for nomic-embed-text)
    fn dimensions(&self) -> usize;

    /// Check if the provider is healthy and available
    fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Batch-embed with positional validation.
///
/// Downstream index alignment depends on strict one-to-one correspondence
/// between inputs and vectors, so a mismatched count or a vector of the
/// wrong dimensionality is an embedding failure, never silently accepted.
pub fn checked_embed_batch(
    provider: &dyn EmbeddingProvider,
    texts: &[String],
) -> Result<Vec<Vec<f32>>> {
    let embeddings = provider.embed_batch(texts)?;

    if embeddings.len() != texts.len() {
        return Err(Error::embedding(format!(
            "provider '{}' returned {} vectors for {} inputs",
            provider.name(),
            embeddings.len(),
            texts.len()
        )));
    }

    let expected = provider.dimensions();
    for (i, vector) in embeddings.iter().enumerate() {
        if vector.len() != expected {
            return Err(Error::embedding(format!(
                "provider '{}' returned a {}-dimensional vector at position {} (expected {})",
                provider.name(),
                vector.len(),
                i,
                expected
            )));
        }
    }

    Ok(embeddings)
}
