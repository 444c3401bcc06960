use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which embedding provider to load for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbeddingProviderKind {
    /// Averaged word vectors from a text vector table.
    WordVectors,
    /// Hashed term-frequency vectors. Always available.
    Tfidf,
}

impl FromStr for EmbeddingProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word-vectors" => Ok(Self::WordVectors),
            "tfidf" => Ok(Self::Tfidf),
            other => Err(format!("unknown embedding provider `{other}`")),
        }
    }
}

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProviderKind,
    /// Path to a whitespace-separated word-vector table.
    pub vectors_path: Option<String>,
    /// Dimensions for the TF-IDF provider (word vectors use the table's width).
    pub dimensions: usize,
    /// Max phrases held by the in-memory embedding cache.
    pub cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::WordVectors,
            vectors_path: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
        }
    }
}
