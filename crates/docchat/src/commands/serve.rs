//! `docchat serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use docchat_completion::HttpCompletionClient;
use docchat_config::{CliSettings, Config};
use docchat_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover docchat.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Word document to answer from (overrides config).
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Enable verbose output (request and completion logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            document: self.document,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        config.require_api_key()?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Document: {}",
            config.source_resolved.document.display()
        ));
        output.info(&format!("Model: {}", config.completion.model));

        let completion = Arc::new(HttpCompletionClient::from_config(&config.completion));
        run_server(server_config_from_config(&config), completion)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
