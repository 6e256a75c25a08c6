//! Word-bounded chunk building with inter-chunk overlap.

use tracing::debug;

use super::normalize::{normalize_whitespace, word_count};

/// Default chunk size in words, sized to fit a bounded model context.
pub const DEFAULT_TARGET_CHUNK_WORDS: usize = 2400;
/// Default tail overlap carried into the next chunk for continuity.
pub const DEFAULT_OVERLAP_WORDS: usize = 200;

/// Greedily packs sentences into chunks of roughly `target_chunk_words`.
///
/// A sentence is never split across chunks, so a chunk may exceed the target
/// by at most one sentence's length. When a chunk closes, the last
/// `overlap_words` words of it are carried into the next chunk as a single
/// pseudo-sentence ahead of the sentence that triggered the overflow. The
/// final partial chunk is always emitted; empty chunks are dropped.
#[must_use]
pub fn chunk_by_words(
    sentences: &[String],
    target_chunk_words: usize,
    overlap_words: usize,
) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_words = 0usize;

    for sentence in sentences {
        let w = word_count(sentence);
        if current_words + w > target_chunk_words && !current.is_empty() {
            let closed = current.join(" ");
            if overlap_words > 0 {
                let words: Vec<&str> = closed.split_whitespace().collect();
                let tail_start = words.len().saturating_sub(overlap_words);
                let tail = words[tail_start..].join(" ");
                current_words = word_count(&tail) + w;
                current = vec![tail, sentence.clone()];
            } else {
                current = vec![sentence.clone()];
                current_words = w;
            }
            chunks.push(closed);
        } else {
            current.push(sentence.clone());
            current_words += w;
        }
    }
    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    let chunks: Vec<String> = chunks
        .iter()
        .map(|c| normalize_whitespace(c))
        .filter(|c| !c.is_empty())
        .collect();
    debug!(
        "Built {} chunks (target {} words, overlap {})",
        chunks.len(),
        target_chunk_words,
        overlap_words
    );
    chunks
}
