//! Source document loading for docchat.
//!
//! Answers are grounded on a single Word document. This crate reads a
//! `.docx` file and returns its text with one paragraph per line, which is
//! the form the prompt builder expects.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let text = docchat_source::load_document(Path::new("guidelines.docx"))?;
//! println!("{} paragraphs", text.lines().count());
//! # Ok::<(), docchat_source::SourceError>(())
//! ```

mod docx;
mod error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use error::SourceError;

/// Load the plain text of a `.docx` document.
///
/// # Errors
///
/// Returns [`SourceError::NotFound`] if the file does not exist, and other
/// variants if it cannot be read or is not a valid Word document.
pub fn load_document(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let text = docx::extract_text(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        chars = text.len(),
        "Loaded source document"
    );
    Ok(text)
}
