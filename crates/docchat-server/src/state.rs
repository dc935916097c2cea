//! Application state.
//!
//! Shared state for all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use docchat_completion::CompletionClient;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Word document the answers are grounded on.
    pub(crate) document: PathBuf,
    /// Client for the remote completion API.
    pub(crate) completion: Arc<dyn CompletionClient>,
}
