//! Section generation over an abstract completion endpoint.
//!
//! Wraps a [`TextCompletion`] transport with prompt construction, defensive
//! JSON recovery, and takeaway-count validation.

use tracing::{info, warn};

use super::TextCompletion;
use super::prompt::build_prompt;
use super::response::extract_json;
use crate::core::models::Sections;
use crate::errors::SummarizeError;

/// A takeaway-count mismatch triggers exactly this many full regenerations
/// before the result is padded or truncated locally.
const COUNT_MISMATCH_RETRIES: usize = 1;

/// Turns raw text into validated `{summary, key_takeaways}` sections.
pub struct SectionGenerator<C: TextCompletion> {
    transport: C,
}

impl<C: TextCompletion> SectionGenerator<C> {
    pub fn new(transport: C) -> Self {
        Self { transport }
    }

    /// The underlying completion transport.
    #[must_use]
    pub fn transport(&self) -> &C {
        &self.transport
    }

    /// Summarizes `text` into about `summary_words` words with exactly
    /// `takeaways_count` key takeaways.
    ///
    /// A response with the wrong takeaway count is regenerated once; if the
    /// count still mismatches, the list is padded with empty strings or
    /// truncated. Parse and endpoint failures are never retried here.
    ///
    /// # Errors
    ///
    /// Propagates transport errors and unrecoverable parse errors.
    pub async fn generate_sections(
        &self,
        text: &str,
        summary_words: usize,
        takeaways_count: usize,
    ) -> Result<Sections, SummarizeError> {
        let prompt = build_prompt(text, summary_words, takeaways_count);

        let mut sections = self.attempt(&prompt).await?;
        let mut retries = 0;
        while sections.key_takeaways.len() != takeaways_count && retries < COUNT_MISMATCH_RETRIES {
            warn!(
                "Model returned {} takeaways, wanted {}; regenerating",
                sections.key_takeaways.len(),
                takeaways_count
            );
            retries += 1;
            sections = self.attempt(&prompt).await?;
        }
        reconcile_takeaways(&mut sections.key_takeaways, takeaways_count);

        Ok(sections)
    }

    async fn attempt(&self, prompt: &str) -> Result<Sections, SummarizeError> {
        let raw = self.transport.complete(prompt).await?;
        let value = extract_json(&raw)?;
        let sections = Sections::from_value(&value);
        info!(
            "Parsed sections: {} summary words, {} takeaways",
            sections.summary.split_whitespace().count(),
            sections.key_takeaways.len()
        );
        Ok(sections)
    }
}

/// Forces the takeaway list to exactly `want` entries.
fn reconcile_takeaways(takeaways: &mut Vec<String>, want: usize) {
    if takeaways.len() < want {
        takeaways.resize(want, String::new());
    } else {
        takeaways.truncate(want);
    }
}
