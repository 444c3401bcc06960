//! # semclust-core
//!
//! Foundation crate for the semclust pipeline.
//! Defines the graph and cluster types, the embedder / clusterer / projection
//! traits, errors, config, and constants. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SemclustConfig;
pub use errors::{SemclustError, SemclustResult};
pub use models::{
    ClusterAssignment, ClusterLabelRow, ClusteredGroup, Label, Node, SimilarityScores, SweepPoint,
    Triple, VariableAssignment, VertexPair,
};
