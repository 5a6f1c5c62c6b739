//! Configuration for the retrieval pipeline

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Main retrieval pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    /// Resolver configuration
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl RetrievalConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Word budget per chunk; a sentence joins the current chunk only while
    /// the combined word count stays strictly below this
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_max_tokens() -> usize {
    300
}

/// Embedding provider (Ollama) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Ollama base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Embedding model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Embedding dimensions (768 for nomic-embed-text)
    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            dimensions: default_dimensions(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "nomic-embed-text".to_string()
}

fn default_dimensions() -> usize {
    768
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_retries() -> u32 {
    2
}

/// Relevance resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum sentence-level similarity required to accept an answer.
    /// Scores strictly below this produce the no-answer sentinel; a score
    /// exactly equal to the threshold is accepted.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f32 {
    0.4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = RetrievalConfig::default();
        assert_eq!(config.chunking.max_tokens, 300);
        assert_eq!(config.resolver.threshold, 0.4);
        assert_eq!(config.embedding.dimensions, 768);
        assert_eq!(config.embedding.base_url, "http://localhost:11434");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RetrievalConfig = toml::from_str(
            r#"
            [chunking]
            max_tokens = 120

            [resolver]
            threshold = 0.55
            "#,
        )
        .unwrap();

        assert_eq!(config.chunking.max_tokens, 120);
        assert_eq!(config.resolver.threshold, 0.55);
        // Untouched sections fall back to defaults
        assert_eq!(config.embedding.model, "nomic-embed-text");
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: RetrievalConfig = toml::from_str("").unwrap();
        assert_eq!(config.chunking.max_tokens, 300);
    }
}
