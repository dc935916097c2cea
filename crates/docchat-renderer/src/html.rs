//! HTML output for rendered answers.
//!
//! All markup emitted by the crate goes through this module so the block
//! renderer and the standalone table renderer share one set of tags and
//! inline styles. Inline styles are used because the output is injected
//! directly into a chat surface that ships no stylesheet for it.

/// Opening tag of a table block.
const TABLE_OPEN: &str = "<table style='border-collapse: collapse; width: 100%;'>";

/// Opening tag of a header cell.
const TH_OPEN: &str = "<th style='border: 1px solid black; padding: 5px; text-align: left;'>";

/// Opening tag of a data cell.
const TD_OPEN: &str = "<td style='border: 1px solid black; padding: 5px;'>";

/// Opening tag of a paragraph.
const P_OPEN: &str = r#"<p style="margin-bottom: 10px;">"#;

/// Opening tag of the display container.
const CONTAINER_OPEN: &str = r#"<div style="max-width: 1000px; padding: 15px; margin: 0 auto; height: 100%; display: flex; flex-direction: column; justify-content: center; overflow-x: auto;">"#;

/// Escape HTML special characters.
///
/// Every character is handled exactly once, so entities produced for one
/// character are never escaped again by a later substitution.
///
/// # Examples
///
/// ```
/// use docchat_renderer::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("it's"), "it&#039;s");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    result
}

pub(crate) fn table_start(out: &mut String) {
    out.push_str(TABLE_OPEN);
}

pub(crate) fn table_end(out: &mut String) {
    out.push_str("</table>");
}

/// Write a header row, escaping every cell.
pub(crate) fn header_row<'a>(cells: impl IntoIterator<Item = &'a str>, out: &mut String) {
    row(TH_OPEN, "</th>", cells, out);
}

/// Write a data row, escaping every cell.
pub(crate) fn data_row<'a>(cells: impl IntoIterator<Item = &'a str>, out: &mut String) {
    row(TD_OPEN, "</td>", cells, out);
}

fn row<'a>(open: &str, close: &str, cells: impl IntoIterator<Item = &'a str>, out: &mut String) {
    out.push_str("<tr>");
    for cell in cells {
        out.push_str(open);
        out.push_str(&escape_html(cell));
        out.push_str(close);
    }
    out.push_str("</tr>");
}

/// Write a heading.
///
/// Dialect levels are shifted down by one (`#` becomes `<h2>`) so rendered
/// answers never compete with the page's own `<h1>`.
pub(crate) fn heading(level: u8, text: &str, out: &mut String) {
    let tag = level.saturating_add(1).min(6);
    out.push_str(&format!("<h{tag}>{}</h{tag}>", escape_html(text)));
}

pub(crate) fn bold(text: &str, out: &mut String) {
    out.push_str("<strong>");
    out.push_str(&escape_html(text));
    out.push_str("</strong>");
}

pub(crate) fn list_start(out: &mut String) {
    out.push_str("<ul>");
}

pub(crate) fn list_end(out: &mut String) {
    out.push_str("</ul>");
}

pub(crate) fn list_item(text: &str, out: &mut String) {
    out.push_str("<li>");
    out.push_str(&escape_html(text));
    out.push_str("</li>");
}

/// Write a paragraph around already-rendered inline HTML.
pub(crate) fn paragraph(inline_html: &str, out: &mut String) {
    out.push_str(P_OPEN);
    out.push_str(inline_html);
    out.push_str("</p>");
}

/// Wrap rendered content in the centered display container.
pub(crate) fn container(content: &str) -> String {
    let mut out = String::with_capacity(CONTAINER_OPEN.len() + content.len() + 6);
    out.push_str(CONTAINER_OPEN);
    out.push_str(content);
    out.push_str("</div>");
    out
}
