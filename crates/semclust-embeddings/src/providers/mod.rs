//! Provider registry.
//!
//! 1. Word vectors (averaged token vectors from a vector table)
//! 2. TF-IDF (always available, lowest quality)

pub mod tfidf_fallback;
pub mod word_vectors;

pub use tfidf_fallback::TfIdfFallback;
pub use word_vectors::WordVectorProvider;

use semclust_core::config::{EmbeddingConfig, EmbeddingProviderKind};
use semclust_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Create the configured provider, returning it boxed.
///
/// Falls back to TF-IDF when the word-vector table is missing or unreadable.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider {
        EmbeddingProviderKind::WordVectors => {
            if let Some(ref path) = config.vectors_path {
                match WordVectorProvider::load(path) {
                    Ok(p) => {
                        info!(
                            provider = "word-vectors",
                            words = p.vocabulary_size(),
                            dims = p.dimensions(),
                            "embedding provider loaded"
                        );
                        return Box::new(p);
                    }
                    Err(e) => {
                        warn!(error = %e, "word-vector table failed to load, falling back");
                    }
                }
            } else {
                warn!("word-vector provider configured but no vectors_path set, falling back");
            }
            info!(provider = "tfidf", "using TF-IDF fallback");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
        EmbeddingProviderKind::Tfidf => {
            info!(provider = "tfidf", "using TF-IDF embedding provider");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}
