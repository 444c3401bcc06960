/// Merge engine and variable assignment errors.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("no representative for cluster {index}: {reason}")]
    UnknownCluster { index: usize, reason: String },

    #[error("{what}: expected {expected} entries, got {actual}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("no reference clusters to assign variables to")]
    NoClusters,
}
