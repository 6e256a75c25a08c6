//! Proportional word budgets for per-chunk mini-summaries.

/// Mini-summary floor, so no chunk degenerates to a few words.
const MIN_CHUNK_SUMMARY_WORDS: usize = 80;

/// Redundancy cushion: overlapping chunks repeat content, and the reduce
/// step compresses it back out.
const CUSHION: f64 = 1.2;

/// Allocates a summary word budget for one chunk, proportional to the
/// chunk's share of the whole document.
///
/// The result is clamped to `[80, max(200, final_target)]` so a single chunk
/// can neither vanish nor dominate the final length. A document with no
/// countable words falls back to the clamped final target.
#[must_use]
pub fn proportional_words(total_words: usize, chunk_words: usize, final_target: usize) -> usize {
    if total_words == 0 {
        return final_target.clamp(50, 2000);
    }
    let ratio = chunk_words as f64 / total_words as f64;
    let alloc = (final_target as f64 * ratio * CUSHION) as usize;
    alloc.clamp(MIN_CHUNK_SUMMARY_WORDS, final_target.max(200))
}
