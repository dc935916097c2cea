//! Error types for document loading.

use std::path::PathBuf;

/// Error while loading a source document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Document does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not a readable zip archive.
    #[error("Invalid document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Archive lacks a required part.
    #[error("Document is missing {0}")]
    MissingPart(&'static str),

    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Encoding error during XML parsing.
    #[error("Encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),
}
