//! `docchat render` command implementation.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use docchat_renderer::{BlockRenderer, format_response};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// File with answer text (default: read stdin).
    file: Option<PathBuf>,

    /// Render a table on its own when the text contains one.
    #[arg(long)]
    table_first: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or stdout is closed.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let text = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        output.result(&render_text(&text, self.table_first))?;
        Ok(())
    }
}

/// Render `text` with the block renderer or the response formatter.
fn render_text(text: &str, table_first: bool) -> String {
    if table_first {
        format_response(text)
    } else {
        BlockRenderer::new().render(text)
    }
}
