//! Standalone extraction of pipe-delimited tables from raw text.
//!
//! Unlike the block renderer this scanner ignores everything that is not a
//! table row, so a table buried in prose can be lifted out and shown alone.

use crate::html;
use crate::line::{SEPARATOR, split_cells};

/// Table lifted out of free-form text.
///
/// The first qualifying line becomes the header and every later one a data
/// row. Rows are kept as found: their lengths are not checked against the
/// header. Cells hold raw text; [`to_html`](Self::to_html) escapes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedTable {
    /// Cells of the first qualifying line.
    pub headers: Option<Vec<String>>,
    /// Cells of every later qualifying line.
    pub rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    /// Whether at least one data row was found.
    #[must_use]
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Render the table as standalone HTML.
    ///
    /// The header row is only written when headers were found.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::table_start(&mut out);
        if let Some(headers) = &self.headers {
            html::header_row(headers.iter().map(String::as_str), &mut out);
        }
        for row in &self.rows {
            html::data_row(row.iter().map(String::as_str), &mut out);
        }
        html::table_end(&mut out);
        out
    }
}

/// Scan `text` for table rows.
///
/// A line qualifies when it contains `|` and splitting it yields more than
/// one non-empty trimmed cell. Lines that do not qualify are ignored.
///
/// # Examples
///
/// ```
/// use docchat_renderer::extract_table;
///
/// let table = extract_table("A | B\n1 | 2\n3 | 4");
/// assert_eq!(table.headers, Some(vec!["A".to_owned(), "B".to_owned()]));
/// assert_eq!(table.rows.len(), 2);
/// ```
#[must_use]
pub fn extract_table(text: &str) -> ExtractedTable {
    let mut table = ExtractedTable::default();

    for line in text.split('\n').filter(|line| line.contains(SEPARATOR)) {
        let row: Vec<String> = split_cells(line).map(str::to_owned).collect();
        if row.len() < 2 {
            continue;
        }
        if table.headers.is_none() {
            table.headers = Some(row);
        } else {
            table.rows.push(row);
        }
    }

    table
}
