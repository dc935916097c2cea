//! Chat completion API client.
//!
//! Provides a sync HTTP client for OpenAI-style `chat/completions`
//! endpoints with bearer token authentication.

use std::time::Duration;

use docchat_config::CompletionConfig;
use serde::{Deserialize, Serialize};
use tracing::info;
use ureq::Agent;

use crate::error::CompletionError;
use crate::prompt::Prompt;

/// Something that turns a prompt into answer text.
///
/// Implementations block until the answer is available; async callers run
/// them on a blocking thread.
pub trait CompletionClient: Send + Sync {
    /// Request a completion and return the answer text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply has no answer.
    fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}

/// Request body for the completion endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: [ChatMessage<'a>; 2],
    model: &'a str,
    stream: bool,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Subset of the completion response that carries the answer.
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: String,
}

impl ChatCompletion {
    /// Take the text of the first choice.
    fn into_answer(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}

/// HTTP client for a chat completion endpoint.
pub struct HttpCompletionClient {
    agent: Agent,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f64,
}

impl HttpCompletionClient {
    /// Create client from config values.
    #[must_use]
    pub fn from_config(config: &CompletionConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Serialize the request body for `prompt`.
    fn request_body(&self, prompt: &Prompt) -> Result<Vec<u8>, CompletionError> {
        let request = ChatRequest {
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            model: &self.model,
            stream: false,
            temperature: self.temperature,
        };
        Ok(serde_json::to_vec(&request)?)
    }
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let payload_bytes = self.request_body(prompt)?;
        let auth_header = format!("Bearer {}", self.api_key);

        info!(model = %self.model, url = %self.api_url, "Requesting completion");

        let response = self
            .agent
            .post(&self.api_url)
            .header("Authorization", &auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if !(200..300).contains(&status) {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(CompletionError::Status {
                status,
                body: error_body,
            });
        }

        let completion: ChatCompletion = body_reader.read_json()?;
        let answer = completion.into_answer()?;
        info!(chars = answer.len(), "Received completion");
        Ok(answer)
    }
}
