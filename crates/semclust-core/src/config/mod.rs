//! Configuration system for semclust.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod clustering_config;
pub mod defaults;
pub mod embedding_config;
pub mod merge_config;
pub mod pairs_config;
pub mod semclust_config;

pub use clustering_config::{ClusteringConfig, DensityAlgorithm, PeerlessPolicy};
pub use embedding_config::{EmbeddingConfig, EmbeddingProviderKind};
pub use merge_config::{AssignmentStrategy, LabelSource, MergeConfig, MetricSelector, SimilarityMetric};
pub use pairs_config::PairsConfig;
pub use semclust_config::{CliOverrides, SemclustConfig};
