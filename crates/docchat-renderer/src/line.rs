//! Line classification.
//!
//! Each trimmed, non-blank line maps to exactly one [`LineKind`]. The checks
//! in [`LineKind::classify`] run in a fixed order and the first match wins,
//! so a line such as `# a | b` is a table row, not a heading.

/// Column separator for table rows.
pub(crate) const SEPARATOR: char = '|';

/// Deepest heading level recognized by the dialect.
const MAX_HEADING_LEVEL: usize = 5;

/// Block-level classification of one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Row of a pipe-delimited table.
    TableRow(TableRow<'a>),
    /// `#` to `#####` followed by a space.
    Heading {
        /// Number of `#` characters (1-5).
        level: u8,
        /// Text after the prefix.
        text: &'a str,
    },
    /// Line wrapped in `**`.
    Bold(&'a str),
    /// Line starting with `* `.
    ListItem(&'a str),
    /// Anything else.
    Paragraph(&'a str),
}

/// A table row, split into its non-empty trimmed cells on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRow<'a> {
    line: &'a str,
    /// Row contains a `-`, which marks it as the header/separator row.
    pub is_header: bool,
}

impl<'a> TableRow<'a> {
    /// Non-empty cells, trimmed, in order.
    pub fn cells(self) -> impl Iterator<Item = &'a str> {
        split_cells(self.line)
    }
}

impl<'a> LineKind<'a> {
    /// Classify a trimmed, non-blank line.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if line.contains(SEPARATOR) {
            return Self::TableRow(TableRow {
                line,
                is_header: line.contains('-'),
            });
        }

        if let Some((level, text)) = heading(line) {
            return Self::Heading { level, text };
        }

        if line.starts_with("**") && line.ends_with("**") {
            // `**` and `***` overlap their own delimiters and have no interior.
            let interior = line.get(2..line.len() - 2).unwrap_or_default();
            return Self::Bold(interior);
        }

        if let Some(text) = line.strip_prefix("* ") {
            return Self::ListItem(text);
        }

        Self::Paragraph(line)
    }
}

/// Match a run of 1 to 5 `#` followed by a space.
fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    // `level` is at most MAX_HEADING_LEVEL, which fits in u8.
    Some((u8::try_from(level).ok()?, text))
}

/// Split a line on the separator, trim each segment and drop empty ones.
pub(crate) fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split(SEPARATOR)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_table_row() {
        let LineKind::TableRow(row) = LineKind::classify("a | b") else {
            panic!("expected table row");
        };
        assert!(!row.is_header);
        assert_eq!(row.cells().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_classify_header_row_by_dash() {
        let LineKind::TableRow(row) = LineKind::classify("|---|---|") else {
            panic!("expected table row");
        };
        assert!(row.is_header);
        assert_eq!(row.cells().collect::<Vec<_>>(), vec!["---", "---"]);
    }

    #[test]
    fn test_table_checked_before_other_kinds() {
        assert!(matches!(LineKind::classify("# a | b"), LineKind::TableRow(_)));
        assert!(matches!(LineKind::classify("* a | b"), LineKind::TableRow(_)));
        assert!(matches!(
            LineKind::classify("**a | b**"),
            LineKind::TableRow(_)
        ));
    }

    #[test]
    fn test_classify_headings() {
        assert_eq!(
            LineKind::classify("# One"),
            LineKind::Heading {
                level: 1,
                text: "One"
            }
        );
        assert_eq!(
            LineKind::classify("## Two"),
            LineKind::Heading {
                level: 2,
                text: "Two"
            }
        );
        assert_eq!(
            LineKind::classify("##### Five"),
            LineKind::Heading {
                level: 5,
                text: "Five"
            }
        );
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(LineKind::classify("#tag"), LineKind::Paragraph("#tag"));
        assert_eq!(LineKind::classify("#"), LineKind::Paragraph("#"));
    }

    #[test]
    fn test_six_hashes_is_paragraph() {
        assert_eq!(
            LineKind::classify("###### Six"),
            LineKind::Paragraph("###### Six")
        );
    }

    #[test]
    fn test_classify_bold() {
        assert_eq!(LineKind::classify("**Note**"), LineKind::Bold("Note"));
        assert_eq!(LineKind::classify("**"), LineKind::Bold(""));
        assert_eq!(LineKind::classify("***"), LineKind::Bold(""));
        assert_eq!(LineKind::classify("****"), LineKind::Bold(""));
    }

    #[test]
    fn test_bold_needs_both_delimiters() {
        assert_eq!(
            LineKind::classify("**Note** here"),
            LineKind::Paragraph("**Note** here")
        );
    }

    #[test]
    fn test_classify_list_item() {
        assert_eq!(LineKind::classify("* item"), LineKind::ListItem("item"));
        assert_eq!(LineKind::classify("*item"), LineKind::Paragraph("*item"));
    }

    #[test]
    fn test_bold_wins_over_list_item() {
        assert_eq!(LineKind::classify("** x **"), LineKind::Bold(" x "));
    }

    #[test]
    fn test_line_without_separator_is_never_a_table_row() {
        assert_eq!(
            LineKind::classify("onlyonecell"),
            LineKind::Paragraph("onlyonecell")
        );
    }

    #[test]
    fn test_split_cells_drops_empty_segments() {
        assert_eq!(
            split_cells("| a ||  b |   |").collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(split_cells("|").count(), 0);
    }
}
