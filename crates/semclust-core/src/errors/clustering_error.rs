/// Clustering, projection and aggregation errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("invalid parameter {parameter}: {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("{stage} requires at least {required} points, got {actual}")]
    NotEnoughPoints {
        stage: String,
        required: usize,
        actual: usize,
    },

    #[error("point dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("{what}: {left} labels for {right} items")]
    LengthMismatch {
        what: String,
        left: usize,
        right: usize,
    },

    #[error("{stage} used before fit")]
    NotFitted { stage: String },

    #[error("clustering backend failed: {reason}")]
    BackendFailed { reason: String },
}

impl ClusteringError {
    pub fn invalid(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
