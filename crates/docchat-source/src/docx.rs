//! WordprocessingML text extraction.
//!
//! Only the visible text of the main document part is kept: text runs,
//! tabs and manual line breaks. Each `w:p` becomes one line.

use std::io::{Read, Seek};

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::SourceError;

/// Main document part inside the archive.
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract paragraph text from a `.docx` archive.
pub(crate) fn extract_text<R: Read + Seek>(reader: R) -> Result<String, SourceError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
        ZipError::FileNotFound => SourceError::MissingPart(DOCUMENT_PART),
        other => SourceError::Archive(other),
    })?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    document_text(&xml)
}

/// Collect the text of every paragraph in `word/document.xml`, one per line.
fn document_text(xml: &str) -> Result<String, SourceError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    // Tab stops in paragraph properties are `w:tab` too; they are not content.
    let mut in_props = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"t" => in_text = true,
                b"pPr" => in_props = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"pPr" => in_props = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if !in_props => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(e) if in_text => {
                current.push_str(&reader.decoder().decode(&e)?);
            }
            Event::GeneralRef(e) if in_text => {
                let entity = reader.decoder().decode(&e)?;
                current.push_str(&decode_entity(&entity));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Resolve a predefined or numeric XML entity, keeping unknown ones verbatim.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}
