//! Line-oriented block renderer.

use crate::html;
use crate::inline::render_inline;
use crate::line::LineKind;
use crate::state::{Block, RenderState};

/// Renders a whole answer document into HTML, one line at a time.
///
/// Lines are trimmed, blank lines are skipped, and every other line is
/// classified with [`LineKind::classify`]. Consecutive list items share one
/// `<ul>`, consecutive table rows share one `<table>`; any other line closes
/// the open block first, and [`render`](Self::render) closes whatever is
/// still open at the end.
///
/// # Example
///
/// ```
/// use docchat_renderer::BlockRenderer;
///
/// let html = BlockRenderer::new().render("# Title\n* a\n* b\nEnd");
/// assert_eq!(
///     html,
///     r#"<h2>Title</h2><ul><li>a</li><li>b</li></ul><p style="margin-bottom: 10px;">End</p>"#
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct BlockRenderer {
    container: bool,
}

impl BlockRenderer {
    /// Create a renderer that returns bare markup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the output in the centered display container.
    #[must_use]
    pub fn with_container(mut self) -> Self {
        self.container = true;
        self
    }

    /// Render a complete document.
    #[must_use]
    pub fn render(&self, document: &str) -> String {
        let mut out = String::with_capacity(document.len() * 2);
        let mut state = RenderState::default();

        for line in document.split('\n').map(str::trim) {
            if line.is_empty() {
                continue;
            }
            render_line(LineKind::classify(line), &mut state, &mut out);
        }
        state.close(&mut out);

        if self.container {
            html::container(&out)
        } else {
            out
        }
    }
}

/// Render a document into bare markup with the default renderer.
///
/// # Examples
///
/// ```
/// use docchat_renderer::render;
///
/// assert_eq!(render("* last"), "<ul><li>last</li></ul>");
/// assert_eq!(render(""), "");
/// ```
#[must_use]
pub fn render(document: &str) -> String {
    BlockRenderer::new().render(document)
}

fn render_line(kind: LineKind<'_>, state: &mut RenderState, out: &mut String) {
    match kind {
        LineKind::TableRow(row) => {
            state.enter(Block::Table, out);
            if row.is_header {
                html::header_row(row.cells(), out);
            } else {
                html::data_row(row.cells(), out);
            }
        }
        LineKind::ListItem(text) => {
            state.enter(Block::List, out);
            html::list_item(text, out);
        }
        LineKind::Heading { level, text } => {
            state.close(out);
            html::heading(level, text, out);
        }
        LineKind::Bold(text) => {
            state.close(out);
            html::bold(text, out);
        }
        LineKind::Paragraph(text) => {
            state.close(out);
            html::paragraph(&render_inline(text), out);
        }
    }
}
