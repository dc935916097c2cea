//! Chat completion client for docchat.
//!
//! Builds a prompt that grounds the model on the source document text and
//! sends it to an OpenAI-compatible `chat/completions` endpoint.
//!
//! - [`HttpCompletionClient`] talks to the real API
//! - [`MockCompletionClient`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use docchat_completion::{CompletionClient, HttpCompletionClient, Prompt};
//! use docchat_config::CompletionConfig;
//!
//! # fn example(config: &CompletionConfig) -> Result<(), docchat_completion::CompletionError> {
//! let client = HttpCompletionClient::from_config(config);
//! let answer = client.complete(&Prompt::grounded("Who is eligible?", "Cities above 100k."))?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
#[cfg(feature = "mock")]
mod mock;
mod prompt;

pub use client::{CompletionClient, HttpCompletionClient};
pub use error::CompletionError;
#[cfg(feature = "mock")]
pub use mock::MockCompletionClient;
pub use prompt::{Prompt, system_prompt};
