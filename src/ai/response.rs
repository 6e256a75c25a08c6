//! Defensive recovery of JSON from noisy model output.
//!
//! Models wrap JSON in code fences, preamble it with prose, or emit
//! Python-flavoured single quotes. The recovery is an ordered chain of
//! fallible strategies tried until one parses; only when every strategy
//! fails does the call surface a parse error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::SummarizeError;

static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^```(?:json)?\s*").expect("valid regex"));
static CLOSING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*```$").expect("valid regex"));

/// Extracts the first JSON object from a possibly noisy model response.
///
/// Strategy order: strip code fences, parse directly, parse the first
/// brace-delimited block, then retry that block with unescaped single
/// quotes replaced by double quotes.
///
/// # Errors
///
/// Returns a parse error when the response is empty or no strategy yields
/// valid JSON.
pub fn extract_json(text: &str) -> Result<Value, SummarizeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SummarizeError::Parse("Empty response from model".to_string()));
    }

    let stripped = strip_fences(text);

    let strategies: [fn(&str) -> Option<Value>; 3] =
        [parse_direct, parse_braced, parse_braced_repaired];
    for strategy in strategies {
        if let Some(value) = strategy(&stripped) {
            return Ok(value);
        }
    }

    Err(SummarizeError::Parse(
        "Could not parse JSON from model output".to_string(),
    ))
}

fn strip_fences(text: &str) -> String {
    let stripped = OPENING_FENCE.replace(text, "");
    let stripped = CLOSING_FENCE.replace(&stripped, "");
    stripped.trim().to_string()
}

fn parse_direct(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

fn parse_braced(text: &str) -> Option<Value> {
    serde_json::from_str(first_braced_block(text)?).ok()
}

fn parse_braced_repaired(text: &str) -> Option<Value> {
    let repaired = repair_single_quotes(first_braced_block(text)?);
    serde_json::from_str(&repaired).ok()
}

/// Widest `{...}` span: first opening brace through last closing brace.
fn first_braced_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Replaces single quotes with double quotes unless backslash-escaped.
fn repair_single_quotes(text: &str) -> String {
    let mut repaired = String::with_capacity(text.len());
    let mut prev = '\0';
    for c in text.chars() {
        if c == '\'' && prev != '\\' {
            repaired.push('"');
        } else {
            repaired.push(c);
        }
        prev = c;
    }
    repaired
}
