//! Prompt-specific error types.

use thiserror::Error;

use super::store::StoreError;
use crate::core::security::{AuthError, OwnershipError};

/// Errors that can occur during prompt operations.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The caller did not present a valid bearer credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    /// The requested prompt was not found.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// The caller does not own the prompt.
    #[error("Forbidden: {0}")]
    Forbidden(#[from] OwnershipError),

    /// The store failed.
    #[error("Store error: {0}")]
    Store(StoreError),
}

/// Outcome class of a failed prompt operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    Forbidden,
    Internal,
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Store(_) => ErrorKind::Internal,
        }
    }
}

// A record vanishing between fetch and write is reported like any other miss.
impl From<StoreError> for PromptError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}
