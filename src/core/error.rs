//! Error types and handling for the prompts API.
//!
//! This module defines a unified error type for every failure a request can
//! end with. Its [`IntoResponse`] impl is the single place where failures
//! become HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domains::prompts::{ErrorKind, PromptError};

/// A specialized Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the prompts API.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The request body could not be read as the expected JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl Error {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Prompt(e) => match e.kind() {
                ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Forbidden => StatusCode::FORBIDDEN,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    /// Short error name and client-facing message.
    ///
    /// Server-side failures are reported generically; their detail only
    /// goes to the log.
    fn describe(&self) -> (&'static str, String) {
        match self {
            Self::Prompt(PromptError::Unauthorized(_)) => {
                ("Unauthorized", "A valid bearer token is required".to_string())
            }
            Self::Prompt(PromptError::NotFound(id)) => {
                ("NotFound", format!("No prompt with id '{}'", id))
            }
            Self::Prompt(PromptError::Forbidden(_)) => {
                ("Forbidden", "Only the owner may modify this prompt".to_string())
            }
            Self::Prompt(PromptError::Store(_)) => {
                ("InternalError", "Internal server error".to_string())
            }
            Self::InvalidBody(rejection) => ("BadRequest", rejection.body_text()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let (name, message) = self.describe();
        (
            status,
            Json(json!({
                "error": {
                    "name": name,
                    "message": message
                }
            })),
        )
            .into_response()
    }
}
