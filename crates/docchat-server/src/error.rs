//! Error types for the HTTP server.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docchat_completion::CompletionError;
use docchat_source::SourceError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Request body is not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Request has no `message` or it is empty.
    #[error("No message provided")]
    MissingMessage,

    /// Source document could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Completion API call failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Blocking task panicked or was cancelled.
    #[error("Request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidBody(rejection) => (rejection.status(), self.to_string()),
            Self::MissingMessage => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Source(SourceError::NotFound(_)) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Source(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error extracting text from Word files: {e}"),
            ),
            Self::Completion(CompletionError::Status { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "API request failed".to_owned(),
            ),
            Self::Completion(_) | Self::Task(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        if status.is_server_error() {
            tracing::warn!(error = %self, "Chat request failed");
        }

        (status, axum::Json(json!({"error": message}))).into_response()
    }
}
