//! Plain-text extraction from uploaded contract files.
//!
//! Extraction never fails: anything that cannot be decoded becomes a bracketed
//! placeholder string, which the analyzers then treat as ordinary text.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;

pub const UNSUPPORTED: &str = "[Unsupported file type]";

/// Dispatch on the lower-cased extension of `file_name`.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> String {
    let name = file_name.to_lowercase();
    let text = if name.ends_with(".pdf") {
        pdf::extract(bytes)
    } else if name.ends_with(".docx") {
        docx::extract(bytes)
    } else if name.ends_with(".txt") {
        String::from_utf8_lossy(bytes).into_owned()
    } else {
        UNSUPPORTED.to_string()
    };
    debug!(file = file_name, chars = text.chars().count(), "extracted text");
    text
}

/// Read `path` from disk and extract its text.
pub fn extract_file(path: &Path) -> Result<String, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(extract_text(&name, &bytes))
}

/// Keep non-blank blocks, separated by a blank line.
fn join_blocks<'a>(blocks: impl IntoIterator<Item = &'a str>) -> String {
    blocks
        .into_iter()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(feature = "pdf")]
mod pdf {
    use super::{join_blocks, warn};

    pub(super) fn extract(bytes: &[u8]) -> String {
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => {
                // Pages come back separated by form feeds.
                let joined = join_blocks(text.split('\u{c}'));
                if joined.is_empty() {
                    "[No text extracted from PDF]".to_string()
                } else {
                    joined
                }
            }
            Err(e) => {
                warn!("PDF extraction failed: {e}");
                format!("[PDF extraction error: {e}]")
            }
        }
    }
}

#[cfg(not(feature = "pdf"))]
mod pdf {
    pub(super) fn extract(_bytes: &[u8]) -> String {
        "[PDF extraction unavailable in this build]".to_string()
    }
}

#[cfg(feature = "docx")]
mod docx {
    use std::io::{Cursor, Read};

    use quick_xml::Reader;
    use quick_xml::events::Event;

    use super::{join_blocks, warn};

    const DOCUMENT_PART: &str = "word/document.xml";

    #[derive(Debug, thiserror::Error)]
    enum DocxError {
        #[error("{0}")]
        Zip(#[from] zip::result::ZipError),
        #[error("{0}")]
        Io(#[from] std::io::Error),
        #[error("{0}")]
        Xml(#[from] quick_xml::Error),
    }

    pub(super) fn extract(bytes: &[u8]) -> String {
        match paragraphs(bytes) {
            Ok(paras) => {
                let joined = join_blocks(paras.iter().map(String::as_str));
                if joined.is_empty() {
                    "[No text extracted from DOCX]".to_string()
                } else {
                    joined
                }
            }
            Err(e) => {
                warn!("DOCX extraction failed: {e}");
                format!("[DOCX extraction error: {e}]")
            }
        }
    }

    /// Text of each `w:p` element, concatenating its `w:t` runs.
    ///
    /// Paragraphs nested in text boxes are emitted before the paragraph that
    /// contains them; the outer paragraph keeps its own text.
    fn paragraphs(bytes: &[u8]) -> Result<Vec<String>, DocxError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut xml = String::new();
        archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

        let mut reader = Reader::from_str(&xml);
        let mut paras = Vec::new();
        let mut current = String::new();
        let mut enclosing: Vec<String> = Vec::new();
        let mut in_text = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:p" => enclosing.push(std::mem::take(&mut current)),
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => current.push('\t'),
                    b"w:br" => current.push('\n'),
                    _ => {}
                },
                Event::Text(t) if in_text => {
                    current.push_str(&t.unescape()?);
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => {
                        paras.push(std::mem::take(&mut current));
                        current = enclosing.pop().unwrap_or_default();
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(paras)
    }

}

#[cfg(not(feature = "docx"))]
mod docx {
    pub(super) fn extract(_bytes: &[u8]) -> String {
        "[DOCX extraction unavailable in this build]".to_string()
    }
}
