use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Density-based algorithm used for the two label columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityAlgorithm {
    Dbscan,
    Hdbscan,
}

impl FromStr for DensityAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dbscan" => Ok(Self::Dbscan),
            "hdbscan" => Ok(Self::Hdbscan),
            other => Err(format!("unknown density algorithm `{other}`")),
        }
    }
}

/// In-sample similarity for a row whose label has no other member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeerlessPolicy {
    /// Report 0.0.
    Zero,
    /// Report NaN; such groups never pass the merge threshold.
    Nan,
}

impl PeerlessPolicy {
    pub fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Nan => f64::NAN,
        }
    }
}

/// Clustering, projection and aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    pub density_algorithm: DensityAlgorithm,
    pub dbscan_eps: f64,
    pub dbscan_min_samples: usize,
    pub hdbscan_min_cluster_size: usize,
    pub projection_dims: usize,
    pub projection_iterations: usize,
    pub seed: u64,
    pub kmeans_max_iterations: usize,
    pub kmeans_tolerance: f64,
    pub peerless_policy: PeerlessPolicy,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            density_algorithm: DensityAlgorithm::Dbscan,
            dbscan_eps: defaults::DEFAULT_DBSCAN_EPS,
            dbscan_min_samples: defaults::DEFAULT_DBSCAN_MIN_SAMPLES,
            hdbscan_min_cluster_size: defaults::DEFAULT_HDBSCAN_MIN_CLUSTER_SIZE,
            projection_dims: defaults::DEFAULT_PROJECTION_DIMS,
            projection_iterations: defaults::DEFAULT_PROJECTION_ITERATIONS,
            seed: defaults::DEFAULT_RANDOM_SEED,
            kmeans_max_iterations: defaults::DEFAULT_KMEANS_MAX_ITERATIONS,
            kmeans_tolerance: defaults::DEFAULT_KMEANS_TOLERANCE,
            peerless_policy: PeerlessPolicy::Zero,
        }
    }
}
