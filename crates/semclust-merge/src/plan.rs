//! Merge planning: which groups collapse, and into which node.

use std::collections::HashMap;

use semclust_core::models::{ClusteredGroup, Node};
use tracing::debug;

/// Original node → representative, for nodes of mergeable groups only.
pub type AssignmentMap = HashMap<Node, Node>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergePlan {
    /// Positions of the mergeable groups, ascending.
    pub indices: Vec<usize>,
    /// Representative of each mergeable group, parallel to `indices`.
    pub representatives: Vec<Node>,
    pub assignments: AssignmentMap,
}

impl MergePlan {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Plan the merge of `groups` at `cluster_threshold`.
///
/// A group is mergeable when the mean of its ratios is at least the
/// threshold. Empty groups and groups with a non-finite mean never merge.
/// When a node occurs in several mergeable groups the later group wins.
pub fn plan_merge(groups: &[ClusteredGroup], cluster_threshold: f64) -> MergePlan {
    let mut plan = MergePlan::default();
    for (idx, group) in groups.iter().enumerate() {
        let Some(mean) = group.mean_ratio() else {
            continue;
        };
        if mean < cluster_threshold {
            continue;
        }
        let Some(rep) = group.representative() else {
            continue;
        };
        plan.indices.push(idx);
        plan.representatives.push(rep.clone());
        for node in &group.nodes {
            plan.assignments.insert(node.clone(), rep.clone());
        }
    }
    debug!(
        groups = groups.len(),
        mergeable = plan.indices.len(),
        mapped = plan.assignments.len(),
        cluster_threshold,
        "merge planned"
    );
    plan
}
