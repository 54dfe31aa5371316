use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("record not found: {0}")]
    Missing(String),

    #[error("backend error: {0}")]
    Backend(String),
}
