//! Input boundary plumbing: byte decoding and source-kind sniffing.
//!
//! The pipeline itself only consumes plain text. This module turns uploaded
//! bytes into text (with encoding fallbacks) and identifies sources that
//! need an external extraction step first.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::errors::SummarizeError;

/// What kind of source a path points at, by MIME sniff on the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain text, or anything we will attempt to decode as text.
    Text,
    /// A PDF; text extraction happens outside this crate.
    Pdf,
}

/// Sniffs the source kind from the file extension.
#[must_use]
pub fn sniff_kind(path: &Path) -> SourceKind {
    let mime = mime_guess::from_path(path).first_or_text_plain();
    if mime.essence_str() == "application/pdf" {
        SourceKind::Pdf
    } else {
        SourceKind::Text
    }
}

/// Decodes text bytes as UTF-8, falling back to UTF-16 then Latin-1.
///
/// Latin-1 maps every byte to a char, so decoding always produces a string;
/// garbage in gives mojibake out rather than an error, matching a
/// best-effort upload path.
#[must_use]
pub fn decode_text_bytes(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }
    if let Some(text) = decode_utf16(bytes) {
        return text;
    }
    warn!("Input is neither UTF-8 nor UTF-16, decoding as Latin-1");
    bytes.iter().map(|&b| b as char).collect()
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    // Honor a BOM when present; assume little-endian without one.
    let (little_endian, data) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (true, bytes),
    };
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units).ok()
}

/// Reads a document from disk and decodes it to plain text.
///
/// # Errors
///
/// Fails for unreadable files, and for PDFs, which must be pre-extracted to
/// text by an external tool before they reach this pipeline.
pub fn read_document(path: &Path) -> Result<String, SummarizeError> {
    if sniff_kind(path) == SourceKind::Pdf {
        return Err(SummarizeError::Input(format!(
            "{} is a PDF; extract its text to a .txt file first and pass that instead",
            path.display()
        )));
    }
    let bytes = fs::read(path)
        .map_err(|e| SummarizeError::Input(format!("Failed to read {}: {e}", path.display())))?;
    Ok(decode_text_bytes(&bytes))
}
