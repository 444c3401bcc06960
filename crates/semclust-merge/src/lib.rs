//! # semclust-merge
//!
//! Collapses cohesive clusters into one representative node, rewrites the
//! edge list, and wires external variables into the merged graph.
//!
//! ```text
//! label table ──selector──▶ groups ──plan_merge──▶ AssignmentMap ──▶ apply_assignment
//!                              │
//!                              └─representatives_for_all──▶ attach_variable_edges
//! ```

pub mod assign;
pub mod graph;
pub mod plan;
pub mod representatives;
pub mod scoring;
pub mod selector;
pub mod substitute;

pub use assign::{
    assign_by_kmeans, assign_by_similarity, attach_variable_edges, KMeansAssignment,
};
pub use graph::{assign_variables, build_final_graph, FinalGraph, VariablePlacement};
pub use plan::{plan_merge, AssignmentMap, MergePlan};
pub use representatives::{representatives_for_all, RepresentativeTable};
pub use scoring::{accuracy, intersection_threshold, sweep_thresholds, threshold_sweep};
pub use selector::{groups_from_table, select_assignment};
pub use substitute::apply_assignment;
