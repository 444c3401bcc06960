//! Picks the label column and ratio column of the label table that feed
//! grouping and the merge decision.

use semclust_clustering::group_nodes_by_cluster;
use semclust_core::config::{LabelSource, MetricSelector, SimilarityMetric};
use semclust_core::errors::ClusteringError;
use semclust_core::models::{ClusterAssignment, ClusterLabelRow, ClusteredGroup};

fn ratio(row: &ClusterLabelRow, selector: MetricSelector) -> f64 {
    match (selector.label_source, selector.metric) {
        (LabelSource::Raw, SimilarityMetric::InSample) => row.dbscan_sim,
        (LabelSource::Raw, SimilarityMetric::OutOfSample) => row.out_sample_dbscan,
        (LabelSource::Projected, SimilarityMetric::InSample) => row.umap_sim,
        (LabelSource::Projected, SimilarityMetric::OutOfSample) => row.out_sample_umap,
    }
}

/// The selected assignment and ratios, row-aligned with `rows`.
pub fn select_assignment(
    rows: &[ClusterLabelRow],
    selector: MetricSelector,
) -> Result<(ClusterAssignment, Vec<f64>), ClusteringError> {
    let nodes = rows.iter().map(|r| r.node.clone()).collect();
    let labels = rows
        .iter()
        .map(|r| match selector.label_source {
            LabelSource::Raw => r.labels,
            LabelSource::Projected => r.umap_labels,
        })
        .collect();
    let ratios = rows.iter().map(|r| ratio(r, selector)).collect();
    Ok((ClusterAssignment::new(nodes, labels)?, ratios))
}

/// Groups over the selected label column, carrying the selected ratios.
pub fn groups_from_table(
    rows: &[ClusterLabelRow],
    selector: MetricSelector,
) -> Result<Vec<ClusteredGroup>, ClusteringError> {
    let (assignment, ratios) = select_assignment(rows, selector)?;
    group_nodes_by_cluster(&assignment, &ratios)
}
