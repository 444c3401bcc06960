/// CSV input/output errors.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("cannot open {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("{path}: missing required column `{column}` (found: {found})")]
    MissingColumn {
        path: String,
        column: String,
        found: String,
    },

    #[error("{path}: malformed row {row}: {reason}")]
    MalformedRow {
        path: String,
        row: usize,
        reason: String,
    },

    #[error("cannot write {path}: {reason}")]
    Write { path: String, reason: String },
}
