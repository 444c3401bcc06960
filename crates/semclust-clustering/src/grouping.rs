//! Label assignment → clustered groups.

use semclust_core::errors::ClusteringError;
use semclust_core::models::{ClusterAssignment, ClusteredGroup, Label};

/// Group nodes by label, carrying each node's ratio.
///
/// Produces one group per label `0..=max_label` in label order, so a label
/// that never occurs still gets an (empty) group at its index. Noise rows
/// are left out. An all-noise assignment yields no groups.
pub fn group_nodes_by_cluster(
    assignment: &ClusterAssignment,
    ratios: &[f64],
) -> Result<Vec<ClusteredGroup>, ClusteringError> {
    if ratios.len() != assignment.len() {
        return Err(ClusteringError::LengthMismatch {
            what: "grouping ratios".to_string(),
            left: ratios.len(),
            right: assignment.len(),
        });
    }
    let Some(max) = assignment.max_cluster_index() else {
        return Ok(Vec::new());
    };

    let mut groups: Vec<ClusteredGroup> = (0..=max).map(|i| ClusteredGroup::new(Label::cluster(i))).collect();
    for ((node, label), &ratio) in assignment.nodes().iter().zip(assignment.labels()).zip(ratios) {
        if let Some(idx) = label.index() {
            groups[idx].push(node.clone(), ratio);
        }
    }
    Ok(groups)
}
