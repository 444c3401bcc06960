//! EmbeddingEngine: the single embedding resource for one pipeline run.
//!
//! Owns the provider and a memoizing cache so each unique phrase is
//! embedded at most once. Implements `IEmbeddingProvider`.

use std::collections::HashMap;

use semclust_core::config::EmbeddingConfig;
use semclust_core::errors::{EmbeddingError, SemclustResult};
use semclust_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::L1MemoryCache;
use crate::providers;

/// The embedding engine.
///
/// Created once per command invocation and passed by reference to every
/// stage. Dropping it releases the model and the cache.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
}

impl EmbeddingEngine {
    /// Create an engine from configuration, falling back to TF-IDF when the
    /// configured provider cannot be loaded.
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self::with_provider(providers::create_provider(config), config.cache_size)
    }

    /// Wrap an explicit provider.
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, cache_size: u64) -> Self {
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            cache_size,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: L1MemoryCache::new(cache_size),
        }
    }

    /// Embed one phrase through the cache.
    pub fn embed(&self, phrase: &str) -> SemclustResult<Vec<f32>> {
        let key = L1MemoryCache::key_for(phrase);
        if let Some(vec) = self.cache.get(&key) {
            return Ok(vec);
        }

        let vec = self.provider.embed(phrase)?;
        let expected = self.provider.dimensions();
        if vec.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: vec.len(),
            }
            .into());
        }
        self.cache.insert(key, vec.clone());
        Ok(vec)
    }

    /// Embed a list of phrases, one output per input in order. Repeated
    /// phrases are embedded once.
    pub fn embed_all(&self, phrases: &[String]) -> SemclustResult<Vec<Vec<f32>>> {
        let mut seen: HashMap<&str, Vec<f32>> = HashMap::with_capacity(phrases.len());
        let mut out = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            if let Some(v) = seen.get(phrase.as_str()) {
                out.push(v.clone());
                continue;
            }
            let v = self.embed(phrase)?;
            seen.insert(phrase.as_str(), v.clone());
            out.push(v);
        }
        debug!(phrases = phrases.len(), unique = seen.len(), "embedded batch");
        Ok(out)
    }

    /// Provider similarity of two phrases.
    pub fn similarity(&self, a: &str, b: &str) -> SemclustResult<f64> {
        let va = self.embed(a)?;
        let vb = self.embed(b)?;
        Ok(self.provider.similarity(&va, &vb))
    }

    /// Similarity of two already-computed vectors.
    pub fn vector_similarity(&self, a: &[f32], b: &[f32]) -> f64 {
        self.provider.similarity(a, b)
    }

    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    /// Number of phrases currently memoized.
    pub fn cached_phrases(&self) -> u64 {
        self.cache.len()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> SemclustResult<Vec<f32>> {
        EmbeddingEngine::embed(self, text)
    }

    fn embed_batch(&self, texts: &[String]) -> SemclustResult<Vec<Vec<f32>>> {
        self.embed_all(texts)
    }

    fn similarity(&self, a: &[f32], b: &[f32]) -> f64 {
        self.provider.similarity(a, b)
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        dims: usize,
        emit: usize,
    }

    impl IEmbeddingProvider for CountingProvider {
        fn embed(&self, text: &str) -> SemclustResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut v = vec![0.0; self.emit];
            if let Some(first) = v.first_mut() {
                *first = text.len() as f32;
            }
            Ok(v)
        }
        fn dimensions(&self) -> usize {
            self.dims
        }
        fn name(&self) -> &str {
            "counting"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    fn engine(dims: usize, emit: usize) -> (EmbeddingEngine, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider {
            calls: Arc::clone(&calls),
            dims,
            emit,
        };
        (EmbeddingEngine::with_provider(Box::new(provider), 100), calls)
    }

    #[test]
    fn each_unique_phrase_embedded_once() {
        let (engine, calls) = engine(2, 2);
        let phrases: Vec<String> = ["flu", "cold", "flu", "flu", "cold"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let out = engine.embed_all(&phrases).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], out[2]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        engine.embed("flu").unwrap();
        engine.similarity("flu", "cold").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let (engine, _) = engine(3, 2);
        assert!(engine.embed("flu").is_err());
    }

    #[test]
    fn default_config_uses_tfidf() {
        let engine = EmbeddingEngine::new(&EmbeddingConfig::default());
        assert_eq!(engine.active_provider(), "tfidf-fallback");
        let s = engine.similarity("infection rate", "infection rate").unwrap();
        assert!((s - 1.0).abs() < 1e-6);
    }

    struct HalfSimilarity;

    impl IEmbeddingProvider for HalfSimilarity {
        fn embed(&self, _text: &str) -> SemclustResult<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }
        fn similarity(&self, _a: &[f32], _b: &[f32]) -> f64 {
            0.5
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "half"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn trait_similarity_forwards_to_provider() {
        let engine = EmbeddingEngine::with_provider(Box::new(HalfSimilarity), 8);
        let as_provider: &dyn IEmbeddingProvider = &engine;
        assert_eq!(as_provider.similarity(&[1.0, 0.0], &[1.0, 0.0]), 0.5);
        assert_eq!(engine.vector_similarity(&[1.0, 0.0], &[1.0, 0.0]), 0.5);
        assert_eq!(engine.similarity("flu", "cold").unwrap(), 0.5);
    }
}
