//! Renderer for the markdown-like dialect of completion answers.
//!
//! Answers come back from the completion API as plain text using a small,
//! ad-hoc subset of markdown. This crate turns that text into HTML that is
//! safe to inject into the chat surface.
//!
//! # Architecture
//!
//! - [`escape_html`]: escapes the five HTML special characters
//! - [`linkify`] / [`render_inline`]: markdown links, bare URLs and emails
//! - [`BlockRenderer`]: line-oriented renderer for headings, bold lines,
//!   lists, tables and paragraphs
//! - [`extract_table`]: pulls a pipe-delimited table out of free text
//! - [`format_response`]: prefers a standalone table, falls back to the
//!   block renderer
//!
//! Every function is pure and total: any string renders to some HTML.
//!
//! # Example
//!
//! ```
//! use docchat_renderer::render;
//!
//! let html = render("## Steps\n* Apply\n* Wait");
//! assert_eq!(html, "<h3>Steps</h3><ul><li>Apply</li><li>Wait</li></ul>");
//! ```

mod html;
mod inline;
mod line;
mod renderer;
mod response;
mod state;
mod table;

pub use html::escape_html;
pub use inline::{linkify, render_inline};
pub use line::{LineKind, TableRow};
pub use renderer::{BlockRenderer, render};
pub use response::format_response;
pub use table::{ExtractedTable, extract_table};
