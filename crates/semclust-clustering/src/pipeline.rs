//! The clustering stage: embed nodes, run the density clusterer on the raw
//! and on the projected embeddings, and score both assignments.

use semclust_core::config::ClusteringConfig;
use semclust_core::errors::{ClusteringError, SemclustResult};
use semclust_core::models::{ClusterAssignment, ClusterLabelRow, Label, Node, SimilarityScores};
use semclust_core::traits::IProjection;
use semclust_embeddings::EmbeddingEngine;
use tracing::info;

use crate::aggregation::aggregate_both;
use crate::algorithms::build_density_clusterer;
use crate::projection::PcaProjection;

/// Everything the cluster label table holds, row-aligned with `nodes`.
#[derive(Debug, Clone)]
pub struct NodeClustering {
    pub nodes: Vec<Node>,
    /// Density labels on the raw embeddings.
    pub raw_labels: Vec<Label>,
    /// Density labels on the projected embeddings.
    pub projected_labels: Vec<Label>,
    pub raw_scores: SimilarityScores,
    pub projected_scores: SimilarityScores,
}

impl NodeClustering {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn raw_assignment(&self) -> Result<ClusterAssignment, ClusteringError> {
        ClusterAssignment::new(self.nodes.clone(), self.raw_labels.clone())
    }

    pub fn projected_assignment(&self) -> Result<ClusterAssignment, ClusteringError> {
        ClusterAssignment::new(self.nodes.clone(), self.projected_labels.clone())
    }

    /// Rows of the cluster label table.
    pub fn to_rows(&self) -> Vec<ClusterLabelRow> {
        (0..self.nodes.len())
            .map(|i| ClusterLabelRow {
                node: self.nodes[i].clone(),
                labels: self.raw_labels[i],
                umap_labels: self.projected_labels[i],
                dbscan_sim: self.raw_scores.in_sample[i],
                umap_sim: self.projected_scores.in_sample[i],
                out_sample_dbscan: self.raw_scores.out_of_sample[i],
                out_sample_umap: self.projected_scores.out_of_sample[i],
            })
            .collect()
    }
}

/// Cluster `nodes` (duplicates allowed; each row keeps its own label).
pub fn cluster_nodes(
    engine: &EmbeddingEngine,
    nodes: Vec<Node>,
    config: &ClusteringConfig,
) -> SemclustResult<NodeClustering> {
    if nodes.is_empty() {
        return Err(ClusteringError::NotEnoughPoints {
            stage: "cluster".to_string(),
            required: 1,
            actual: 0,
        }
        .into());
    }
    let embeddings = engine.embed_all(&nodes)?;

    let raw_labels = build_density_clusterer(config)?.fit(&embeddings)?;

    let mut projection = PcaProjection::new(
        config.projection_dims,
        config.projection_iterations,
        config.seed,
    );
    let projected = projection.fit_transform(&embeddings)?;
    let projected_labels = build_density_clusterer(config)?.fit(&projected)?;

    let (raw_scores, projected_scores) = aggregate_both(
        engine,
        &raw_labels,
        &projected_labels,
        &embeddings,
        config.peerless_policy,
    )?;

    info!(
        nodes = nodes.len(),
        raw_clusters = cluster_count(&raw_labels),
        projected_clusters = cluster_count(&projected_labels),
        "clustering complete"
    );
    Ok(NodeClustering {
        nodes,
        raw_labels,
        projected_labels,
        raw_scores,
        projected_scores,
    })
}

fn cluster_count(labels: &[Label]) -> usize {
    labels.iter().filter_map(|l| l.index()).max().map_or(0, |m| m + 1)
}
