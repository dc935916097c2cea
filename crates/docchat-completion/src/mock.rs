//! Mock completion client for testing.
//!
//! Provides [`MockCompletionClient`] for exercising callers without network
//! access.

use std::sync::RwLock;

use crate::client::CompletionClient;
use crate::error::CompletionError;
use crate::prompt::Prompt;

/// Canned outcome returned by the mock.
#[derive(Clone, Debug)]
enum Reply {
    Answer(String),
    Status { status: u16, body: String },
}

/// Mock completion client for testing.
///
/// Returns a fixed answer (or a fixed API failure) and records every prompt
/// it receives.
///
/// # Example
///
/// ```ignore
/// use docchat_completion::{CompletionClient, MockCompletionClient, Prompt};
///
/// let client = MockCompletionClient::with_answer("# Title");
/// let answer = client.complete(&Prompt::grounded("q", "c")).unwrap();
/// assert_eq!(answer, "# Title");
/// assert_eq!(client.prompts().len(), 1);
/// ```
#[derive(Debug)]
pub struct MockCompletionClient {
    reply: Reply,
    prompts: RwLock<Vec<Prompt>>,
}

impl MockCompletionClient {
    /// Create a mock that always answers with `answer`.
    #[must_use]
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            reply: Reply::Answer(answer.into()),
            prompts: RwLock::new(Vec::new()),
        }
    }

    /// Create a mock that always fails as if the API returned `status`.
    #[must_use]
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: Reply::Status {
                status,
                body: body.into(),
            },
            prompts: RwLock::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.read().unwrap().clone()
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        self.prompts.write().unwrap().push(prompt.clone());
        match &self.reply {
            Reply::Answer(answer) => Ok(answer.clone()),
            Reply::Status { status, body } => Err(CompletionError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
