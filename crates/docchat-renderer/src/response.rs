//! Final formatting step for completion answers.

use crate::renderer::BlockRenderer;
use crate::table::extract_table;

/// Format an answer for display.
///
/// When the text holds a table with at least one data row, only that table
/// is returned. Otherwise the whole text goes through the block renderer,
/// wrapped in the display container.
///
/// # Examples
///
/// ```
/// use docchat_renderer::format_response;
///
/// let html = format_response("Totals:\nA | B\n1 | 2");
/// assert!(html.starts_with("<table"));
/// assert!(!html.contains("Totals"));
/// ```
#[must_use]
pub fn format_response(text: &str) -> String {
    let table = extract_table(text);
    if table.has_rows() {
        table.to_html()
    } else {
        BlockRenderer::new().with_container().render(text)
    }
}
