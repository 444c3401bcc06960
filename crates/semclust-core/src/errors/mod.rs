//! Error handling for semclust.
//! One error enum per subsystem, `thiserror` only, aggregated by `SemclustError`.

pub mod clustering_error;
pub mod config_error;
pub mod embedding_error;
pub mod io_error;
pub mod merge_error;
pub mod semclust_error;

pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use io_error::IoError;
pub use merge_error::MergeError;
pub use semclust_error::{SemclustError, SemclustResult};
