//! Final graph build: merge cohesive clusters, then wire variables in.

use semclust_core::config::{AssignmentStrategy, SemclustConfig};
use semclust_core::errors::SemclustResult;
use semclust_core::models::{ClusterAssignment, ClusterLabelRow, ClusteredGroup, Triple, VariableAssignment};
use semclust_embeddings::{normalize_variables, EmbeddingEngine};
use tracing::info;

use crate::assign::{assign_by_kmeans, assign_by_similarity, attach_variable_edges};
use crate::plan::{plan_merge, MergePlan};
use crate::representatives::{representatives_for_all, RepresentativeTable};
use crate::selector::{groups_from_table, select_assignment};

/// Variables placed in clusters, plus the groups their cluster ids refer to.
#[derive(Debug, Clone)]
pub struct VariablePlacement {
    pub assignments: Vec<VariableAssignment>,
    /// Groups indexed by `VariableAssignment::cluster`.
    pub groups: Vec<ClusteredGroup>,
    /// k-means training assignment of the reference nodes (classifier
    /// strategy only).
    pub training: Option<ClusterAssignment>,
}

impl VariablePlacement {
    pub fn representatives(&self) -> RepresentativeTable {
        representatives_for_all(&self.groups)
    }
}

/// Normalize `variables` and place each in a cluster of the label table
/// using the configured strategy.
pub fn assign_variables(
    engine: &EmbeddingEngine,
    rows: &[ClusterLabelRow],
    variables: &[String],
    config: &SemclustConfig,
) -> SemclustResult<VariablePlacement> {
    let variables = normalize_variables(variables);
    let selector = config.merge.selector();
    match config.merge.assignment_strategy {
        AssignmentStrategy::Similarity => {
            let groups = groups_from_table(rows, selector)?;
            let assignments = assign_by_similarity(engine, &groups, &variables)?;
            Ok(VariablePlacement {
                assignments,
                groups,
                training: None,
            })
        }
        AssignmentStrategy::Kmeans => {
            let (reference, ratios) = select_assignment(rows, selector)?;
            let km = assign_by_kmeans(engine, &reference, &ratios, &variables, &config.clustering)?;
            Ok(VariablePlacement {
                assignments: km.assignments,
                groups: km.groups,
                training: Some(km.training),
            })
        }
    }
}

#[derive(Debug, Clone)]
pub struct FinalGraph {
    /// Substituted edges followed by the appended `implements` edges.
    pub edges: Vec<Triple>,
    pub plan: MergePlan,
    pub placement: VariablePlacement,
    pub attached: usize,
}

/// Build the merged graph from the label table, the original edges and the
/// raw variable names.
pub fn build_final_graph(
    engine: &EmbeddingEngine,
    rows: &[ClusterLabelRow],
    edges: &[Triple],
    variables: &[String],
    config: &SemclustConfig,
) -> SemclustResult<FinalGraph> {
    let groups = groups_from_table(rows, config.merge.selector())?;
    let plan = plan_merge(&groups, config.merge.cluster_threshold);
    let mut merged = crate::substitute::apply_assignment(edges, &plan.assignments);

    let placement = assign_variables(engine, rows, variables, config)?;
    let attached = attach_variable_edges(
        &mut merged,
        &placement.assignments,
        &placement.representatives(),
        config.merge.variable_threshold,
    )?;

    info!(
        edges = edges.len(),
        merged_groups = plan.indices.len(),
        variables = variables.len(),
        attached,
        "final graph built"
    );
    Ok(FinalGraph {
        edges: merged,
        plan,
        placement,
        attached,
    })
}
