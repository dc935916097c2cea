//! Chat API endpoint.
//!
//! Answers a question from the source document and returns the answer as
//! rendered HTML.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use docchat_completion::Prompt;
use docchat_renderer::format_response;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    /// The user's question.
    #[serde(default)]
    message: Option<String>,
}

/// Response for POST /chat.
#[derive(Debug, Serialize)]
pub(crate) struct ChatResponse {
    /// Rendered answer markup.
    response: String,
}

/// Handle POST /chat.
pub(crate) async fn post_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    let Json(request) = payload?;
    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or(ServerError::MissingMessage)?;

    let response = tokio::task::spawn_blocking(move || answer(&state, &message)).await??;
    Ok(Json(ChatResponse { response }))
}

/// Load the document, ask the completion API and render the answer.
fn answer(state: &AppState, message: &str) -> Result<String, ServerError> {
    let context = docchat_source::load_document(&state.document)?;
    let prompt = Prompt::grounded(message, &context);
    let reply = state.completion.complete(&prompt)?;
    let html = format_response(&reply);
    tracing::debug!(answer_chars = reply.len(), html_chars = html.len(), "Formatted answer");
    Ok(html)
}
