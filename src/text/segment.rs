//! Heuristic sentence segmentation.
//!
//! Splits normalized text on whitespace that follows terminal punctuation.
//! Punctuation-sparse text (transcripts, OCR dumps) gets fixed-size
//! pseudo-sentences instead, so the chunk builder always has units to pack.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{normalize_whitespace, word_count};

/// Words per pseudo-sentence when the text has too little punctuation.
const PSEUDO_SENTENCE_WORDS: usize = 30;

/// Fragments shorter than this many words are merged into a running buffer.
const MIN_SENTENCE_WORDS: usize = 4;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// Splits text into sentence-like units covering the whole input in order.
///
/// Density rule: fewer than one `.!?` mark per ~1000 characters (floor of
/// one) means the text is treated as unpunctuated and grouped into
/// [`PSEUDO_SENTENCE_WORDS`]-word pseudo-sentences. Otherwise the text is
/// split after terminal punctuation, and fragments under
/// [`MIN_SENTENCE_WORDS`] words are merged forward. A trailing buffer that
/// never reaches the minimum is still emitted.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let cleaned = normalize_whitespace(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let terminal_marks = cleaned
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count();
    let density_floor = (cleaned.chars().count() / 1000).max(1);
    if terminal_marks < density_floor {
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        return words
            .chunks(PSEUDO_SENTENCE_WORDS)
            .map(|group| group.join(" "))
            .collect();
    }

    let mut parts = Vec::new();
    let mut last = 0;
    for m in SENTENCE_BREAK.find_iter(&cleaned) {
        // Keep the punctuation mark with the preceding sentence.
        let end = m.start() + 1;
        parts.push(cleaned[last..end].to_string());
        last = m.end();
    }
    if last < cleaned.len() {
        parts.push(cleaned[last..].to_string());
    }

    merge_tiny_fragments(parts)
}

fn merge_tiny_fragments(parts: Vec<String>) -> Vec<String> {
    let mut merged = Vec::new();
    let mut buf = String::new();

    for part in parts {
        let part = part.trim();
        if word_count(part) < MIN_SENTENCE_WORDS {
            if buf.is_empty() {
                buf = part.to_string();
            } else {
                buf.push(' ');
                buf.push_str(part);
            }
            if word_count(&buf) >= MIN_SENTENCE_WORDS {
                merged.push(std::mem::take(&mut buf));
            }
        } else {
            if !buf.is_empty() {
                merged.push(std::mem::take(&mut buf));
            }
            merged.push(part.to_string());
        }
    }
    if !buf.is_empty() {
        merged.push(buf);
    }

    merged.retain(|p| !p.is_empty());
    merged
}
