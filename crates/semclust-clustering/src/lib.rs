//! # semclust-clustering
//!
//! Turns node embeddings into labeled clusters and per-node similarity
//! ratios.
//!
//! - [`algorithms`]: DBSCAN, HDBSCAN and k-means behind `IClusterer`
//! - [`projection`]: PCA projection shared by reference and new points
//! - [`grouping`]: label assignment → `ClusteredGroup`s
//! - [`aggregation`]: in-sample / out-of-sample average similarity
//! - [`pairs`]: vertex pair export and similar-vertex detection
//! - [`pipeline`]: the two per-run density assignments plus their scores

pub mod aggregation;
pub mod algorithms;
pub mod grouping;
pub mod pairs;
pub mod pipeline;
pub mod projection;

pub use aggregation::{aggregate, aggregate_both, aggregate_with_matrix, similarity_matrix};
pub use algorithms::{build_density_clusterer, Dbscan, HdbscanClusterer, KMeans};
pub use grouping::group_nodes_by_cluster;
pub use pairs::{similar_vertices, unique_pairs, vertex_pairs};
pub use pipeline::{cluster_nodes, NodeClustering};
pub use projection::PcaProjection;
