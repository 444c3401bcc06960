use serde::{Deserialize, Serialize};

use super::defaults;

/// Vertex pair export and similar-vertex detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PairsConfig {
    /// Pairs strictly above this similarity count as similar vertices.
    pub similar_vertex_threshold: f64,
    /// Seed for shuffling the exported pair list.
    pub shuffle_seed: u64,
}

impl Default for PairsConfig {
    fn default() -> Self {
        Self {
            similar_vertex_threshold: defaults::DEFAULT_SIMILAR_VERTEX_THRESHOLD,
            shuffle_seed: defaults::DEFAULT_SHUFFLE_SEED,
        }
    }
}
