use thiserror::Error;

use crate::shared::infrastructure::store_error::StoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    /// Stable machine-readable kind, used as the GraphQL error code.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION",
            ServiceError::Unauthorized => "UNAUTHORIZED",
            ServiceError::Forbidden => "FORBIDDEN",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::Conflict(_) => "CONFLICT",
            ServiceError::Internal(_) => "INTERNAL",
        }
    }

    /// Message safe to hand to a caller; internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::VersionMismatch { .. } => {
                ServiceError::Conflict("Time entry was modified concurrently".to_string())
            }
            StoreError::Missing(what) => ServiceError::NotFound(what),
            StoreError::Backend(cause) => ServiceError::Internal(cause),
        }
    }
}
