use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which label column of the cluster table defines the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelSource {
    /// Density labels on the raw embeddings (`labels`).
    Raw,
    /// Density labels on the projected embeddings (`umapLabels`).
    Projected,
}

/// Which per-node ratio feeds representative choice and the merge threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityMetric {
    InSample,
    OutOfSample,
}

/// Label column plus ratio column used for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSelector {
    pub label_source: LabelSource,
    pub metric: SimilarityMetric,
}

impl Default for MetricSelector {
    fn default() -> Self {
        Self {
            label_source: LabelSource::Projected,
            metric: SimilarityMetric::InSample,
        }
    }
}

/// How variables are matched to reference clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStrategy {
    /// Highest mean similarity to the group's nodes.
    Similarity,
    /// K-means trained on the projected reference nodes.
    Kmeans,
}

impl FromStr for AssignmentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "similarity" => Ok(Self::Similarity),
            "kmeans" => Ok(Self::Kmeans),
            other => Err(format!("unknown assignment strategy `{other}`")),
        }
    }
}

/// Merge engine and variable attachment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Minimum mean ratio for a cluster to collapse into its representative.
    pub cluster_threshold: f64,
    /// Average similarity a variable must exceed to be attached.
    pub variable_threshold: f64,
    pub label_source: LabelSource,
    pub metric: SimilarityMetric,
    pub assignment_strategy: AssignmentStrategy,
}

impl MergeConfig {
    pub fn selector(&self) -> MetricSelector {
        MetricSelector {
            label_source: self.label_source,
            metric: self.metric,
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        let selector = MetricSelector::default();
        Self {
            cluster_threshold: defaults::DEFAULT_CLUSTER_THRESHOLD,
            variable_threshold: defaults::DEFAULT_VARIABLE_THRESHOLD,
            label_source: selector.label_source,
            metric: selector.metric,
            assignment_strategy: AssignmentStrategy::Kmeans,
        }
    }
}
