use super::{ClusteringError, ConfigError, EmbeddingError, IoError, MergeError};

/// Top-level error aggregating every subsystem via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SemclustError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("merge error: {0}")]
    Merge(#[from] MergeError),

    #[error("io error: {0}")]
    Io(#[from] IoError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type SemclustResult<T> = Result<T, SemclustError>;
