use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Smallest accepted final summary length, in words.
pub const MIN_TARGET_WORDS: usize = 50;
/// Largest accepted final summary length, in words.
pub const MAX_TARGET_WORDS: usize = 2000;
/// Default final summary length, in words.
pub const DEFAULT_TARGET_WORDS: usize = 200;

/// Smallest accepted key-takeaway count.
pub const MIN_TAKEAWAYS: usize = 1;
/// Largest accepted key-takeaway count.
pub const MAX_TAKEAWAYS: usize = 10;
/// Default key-takeaway count.
pub const DEFAULT_TAKEAWAYS: usize = 3;

/// User-tunable knobs for a single summarization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Requested word count of the final summary.
    pub target_words: usize,
    /// Requested number of key takeaways.
    pub takeaways_count: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            target_words: DEFAULT_TARGET_WORDS,
            takeaways_count: DEFAULT_TAKEAWAYS,
        }
    }
}

impl SummaryOptions {
    /// Builds options with both knobs clamped into their accepted ranges.
    #[must_use]
    pub fn clamped(target_words: usize, takeaways_count: usize) -> Self {
        Self {
            target_words: target_words.clamp(MIN_TARGET_WORDS, MAX_TARGET_WORDS),
            takeaways_count: takeaways_count.clamp(MIN_TAKEAWAYS, MAX_TAKEAWAYS),
        }
    }
}

/// Structured result of one generation call, and of the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    pub summary: String,
    pub key_takeaways: Vec<String>,
}

impl Sections {
    /// Extracts the sections from an untrusted parsed JSON value.
    ///
    /// Missing `summary` defaults to `""`; a missing, `null`, or non-list
    /// `key_takeaways` normalizes to an empty list so count validation can
    /// run against it. Non-string list items are stringified rather than
    /// dropped, preserving the item count.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let summary = value
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let key_takeaways = value
            .get("key_takeaways")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            summary,
            key_takeaways,
        }
    }
}
