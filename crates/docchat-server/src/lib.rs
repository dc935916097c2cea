//! HTTP server for docchat.
//!
//! Serves a single JSON endpoint, `POST /chat`, that answers a question from
//! the configured Word document:
//!
//! ```text
//! Browser ──POST /chat──► axum handler
//!                            │  (spawn_blocking)
//!                            ├─► docchat-source      (docx → text)
//!                            ├─► docchat-completion  (prompt → answer)
//!                            └─► docchat-renderer    (answer → HTML)
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use docchat_completion::MockCompletionClient;
//! use docchat_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         document: PathBuf::from("guidelines.docx"),
//!         ..ServerConfig::default()
//!     };
//!     let client = Arc::new(MockCompletionClient::with_answer("# Hello"));
//!
//!     run_server(config, client).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use docchat_completion::CompletionClient;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Word document the answers are grounded on.
    pub document: PathBuf,
    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Request body limit in bytes.
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            document: PathBuf::from("document.docx"),
            cors_origins: vec!["http://localhost:3000".to_owned()],
            max_body_size: 16 * 1024 * 1024,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `completion` - Client used to answer questions
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    completion: Arc<dyn CompletionClient>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        document: config.document.clone(),
        completion,
    });

    let app = app::create_router(state, &config.cors_origins, config.max_body_size);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        document = %config.document.display(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from docchat config.
#[must_use]
pub fn server_config_from_config(config: &docchat_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        document: config.source_resolved.document.clone(),
        cors_origins: config.server.cors_origins.clone(),
        max_body_size: config.server.max_body_size,
    }
}
