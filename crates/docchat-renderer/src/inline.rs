//! Inline formatting: escaping and link detection within a single line.
//!
//! Links are recognized on already-escaped text. Escaping first keeps the
//! surrounding prose and the link targets safe, and the patterns below never
//! need to look for raw `<` or `>`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::html::escape_html;

/// Markdown links, bare URLs and email addresses in one alternation.
///
/// The regex engine picks the leftmost match and, at equal positions, the
/// first alternative. Every region of the line is therefore claimed by at
/// most one pattern: a URL inside `[label](url)` belongs to the markdown
/// link, and an `@` inside a URL never becomes a `mailto:` link.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\[(?P<label>[^\]]*)\]\((?P<href>[^)]*)\)",
        r"|(?P<url>https?://\S+)",
        r"|(?P<email>\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b)",
    ))
    .unwrap()
});

/// Replace markdown links, bare URLs and email addresses with anchors.
///
/// The input is expected to be escaped already (see [`render_inline`]);
/// matched text is copied into the anchor as-is.
///
/// # Examples
///
/// ```
/// use docchat_renderer::linkify;
///
/// assert_eq!(
///     linkify("[Docs](http://example.com)"),
///     r#"<a href="http://example.com">Docs</a>"#
/// );
/// ```
#[must_use]
pub fn linkify(line: &str) -> String {
    LINK_RE
        .replace_all(line, |caps: &Captures<'_>| {
            if let (Some(label), Some(href)) = (caps.name("label"), caps.name("href")) {
                format!(r#"<a href="{}">{}</a>"#, href.as_str(), label.as_str())
            } else if let Some(url) = caps.name("url") {
                format!(r#"<a href="{0}">{0}</a>"#, url.as_str())
            } else if let Some(email) = caps.name("email") {
                format!(r#"<a href="mailto:{0}">{0}</a>"#, email.as_str())
            } else {
                caps[0].to_owned()
            }
        })
        .into_owned()
}

/// Render one line of prose: escape it, then turn links into anchors.
///
/// This is the only way the block renderer formats paragraph text.
#[must_use]
pub fn render_inline(line: &str) -> String {
    linkify(&escape_html(line))
}
