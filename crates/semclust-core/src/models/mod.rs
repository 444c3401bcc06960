//! Graph, cluster and score types passed between pipeline stages.

pub mod assignment;
pub mod group;
pub mod label;
pub mod label_row;
pub mod pair;
pub mod scores;
pub mod sweep;
pub mod triple;
pub mod variable;

pub use assignment::ClusterAssignment;
pub use group::ClusteredGroup;
pub use label::Label;
pub use label_row::{ClusterLabelRow, CLUSTER_LABEL_COLUMNS};
pub use pair::VertexPair;
pub use scores::SimilarityScores;
pub use sweep::SweepPoint;
pub use triple::Triple;
pub use variable::VariableAssignment;

/// A subject or object phrase. Identity is the exact string value.
pub type Node = String;
