use crate::errors::SemclustResult;
use crate::similarity::cosine_similarity;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single phrase, returning a vector of floats.
    fn embed(&self, text: &str) -> SemclustResult<Vec<f32>>;

    /// Embed a batch of phrases.
    fn embed_batch(&self, texts: &[String]) -> SemclustResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Similarity of two vectors produced by this provider.
    fn similarity(&self, a: &[f32], b: &[f32]) -> f64 {
        cosine_similarity(a, b)
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
