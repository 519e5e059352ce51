//! Document-to-text extraction for uploaded resumes.
//!
//! Supported: PDF (`pdf-extract`), DOCX (zip container + `word/document.xml`)
//! and plain text. The kind is taken from the file extension first, then the
//! declared content type.

pub mod handlers;

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

const DOCX_BODY: &str = "word/document.xml";

static PARAGRAPH_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</w:p>|<w:br\s*/>|<w:cr\s*/>").expect("valid regex"));
static TAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<w:tab\s*/>").expect("valid regex"));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[xX]([0-9a-fA-F]+)|#([0-9]+)|(lt|gt|quot|apos|amp));").expect("valid regex")
});

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file type '{0}' (expected pdf, docx or txt)")]
    UnsupportedFileType(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("DOCX archive has no {DOCX_BODY}")]
    MissingDocumentBody,

    #[error("invalid archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Option<Self> {
        let from_extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| match ext.to_ascii_lowercase().as_str() {
                "pdf" => Some(Self::Pdf),
                "docx" => Some(Self::Docx),
                "txt" => Some(Self::Txt),
                _ => None,
            });

        from_extension.or_else(|| {
            let mime = content_type?.split(';').next()?.trim().to_ascii_lowercase();
            match mime.as_str() {
                "application/pdf" => Some(Self::Pdf),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                    Some(Self::Docx)
                }
                "text/plain" => Some(Self::Txt),
                _ => None,
            }
        })
    }
}

/// Extracts plain text from an uploaded document.
pub fn extract_text(
    file_name: Option<&str>,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, ExtractionError> {
    let kind = DocumentKind::detect(file_name, content_type).ok_or_else(|| {
        ExtractionError::UnsupportedFileType(
            file_name
                .or(content_type)
                .unwrap_or("unknown")
                .to_string(),
        )
    })?;

    let text = match kind {
        DocumentKind::Pdf => extract_pdf(bytes)?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::Txt => decode_text(bytes),
    };

    debug!(?kind, bytes = bytes.len(), chars = text.len(), "document extracted");
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed documents instead of returning an error.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(result) => result.map_err(|e| ExtractionError::Pdf(e.to_string())),
        Err(_) => Err(ExtractionError::Pdf("malformed PDF document".to_string())),
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    {
        let mut body = match archive.by_name(DOCX_BODY) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(ExtractionError::MissingDocumentBody)
            }
            Err(e) => return Err(e.into()),
        };
        body.read_to_string(&mut xml)
            .map_err(|e| ExtractionError::Docx(e.to_string()))?;
    }
    Ok(docx_xml_to_text(&xml))
}

fn docx_xml_to_text(xml: &str) -> String {
    let text = PARAGRAPH_END.replace_all(xml, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = ANY_TAG.replace_all(&text, "");
    decode_entities(&text).trim().to_string()
}

/// Decodes the predefined XML entities and numeric character references in
/// one pass, so `&amp;#38;` stays `&#38;`. Unknown or invalid references are
/// left as written.
fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let decoded = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = caps.get(2) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match caps.get(3).map(|m| m.as_str()) {
                    Some("lt") => Some('<'),
                    Some("gt") => Some('>'),
                    Some("quot") => Some('"'),
                    Some("apos") => Some('\''),
                    Some("amp") => Some('&'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warn!(error = %e, "resume text is not valid UTF-8; replacing invalid sequences");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
