//! Map-reduce summarization orchestration.
//!
//! Short inputs skip chunking entirely: the text itself is the summary and
//! one generator call supplies the takeaways. Everything else flows through
//! segment -> chunk -> per-chunk map calls -> one reduce call over the
//! concatenated mini-summaries.

pub mod budget;

use futures::future::try_join_all;
use tracing::info;

use crate::ai::{SectionGenerator, TextCompletion};
use crate::core::models::{Sections, SummaryOptions};
use crate::errors::SummarizeError;
use crate::text::{
    DEFAULT_OVERLAP_WORDS, DEFAULT_TARGET_CHUNK_WORDS, chunk_by_words, normalize_whitespace,
    split_sentences, word_count,
};

pub use budget::proportional_words;

/// Inputs under this many words are returned unchanged as their own summary.
pub const SHORT_INPUT_WORDS: usize = 60;

/// Canonical failure message shown to users when summarization fails.
pub const CANONICAL_FAILURE_MESSAGE: &str =
    "Sorry, I couldn't generate a summary at this time. Please try again later.";

/// Summarizes a document of any length into `{summary, key_takeaways}`.
///
/// Inputs under [`SHORT_INPUT_WORDS`] words short-circuit: the normalized
/// text is returned as the summary verbatim and the single generator call
/// only supplies the takeaways. Longer inputs are chunked and mapped with
/// per-chunk budgets (no bullets at chunk level), then reduced in one final
/// call with the requested takeaway count. Map calls run concurrently but
/// their results are joined in chunk order.
///
/// # Errors
///
/// Rejects empty input before any network call; any map or reduce failure
/// aborts the whole operation.
pub async fn summarize_document<C: TextCompletion>(
    generator: &SectionGenerator<C>,
    raw_text: &str,
    opts: &SummaryOptions,
) -> Result<Sections, SummarizeError> {
    let text = normalize_whitespace(raw_text);
    if text.is_empty() {
        return Err(SummarizeError::Input(
            "Please provide some text to summarize".to_string(),
        ));
    }

    let n_words = word_count(&text);
    if n_words < SHORT_INPUT_WORDS {
        info!("Short input ({n_words} words), skipping chunking");
        // The text is its own summary; the model call only supplies bullets.
        let mini = generator
            .generate_sections(
                &text,
                opts.target_words.min(n_words.max(30)),
                opts.takeaways_count,
            )
            .await?;
        return Ok(Sections {
            summary: text,
            key_takeaways: mini.key_takeaways,
        });
    }

    let sentences = split_sentences(&text);
    let chunks = chunk_by_words(&sentences, DEFAULT_TARGET_CHUNK_WORDS, DEFAULT_OVERLAP_WORDS);
    info!("Mapping {} chunks ({n_words} words total)", chunks.len());

    // Map step: fan out per-chunk calls, join in chunk order.
    let minis = try_join_all(chunks.iter().map(|chunk| {
        let chunk_target = proportional_words(n_words, word_count(chunk), opts.target_words);
        generator.generate_sections(chunk, chunk_target, 0)
    }))
    .await?;

    // Reduce step over the non-empty mini-summaries.
    let combined = minis
        .iter()
        .map(|mini| mini.summary.as_str())
        .filter(|summary| !summary.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    info!("Reducing {} mini-summaries", minis.len());

    generator
        .generate_sections(&combined, opts.target_words, opts.takeaways_count)
        .await
}
