//! Error types for the completion client.

/// Error from a completion request.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// Completion API returned a non-success status.
    #[error("API request failed: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response had no choices to take the answer from.
    #[error("Completion response contained no choices")]
    EmptyResponse,
}
