//! Text preparation: normalization, sentence segmentation, chunk building.

pub mod chunk;
pub mod normalize;
pub mod segment;

pub use chunk::{DEFAULT_OVERLAP_WORDS, DEFAULT_TARGET_CHUNK_WORDS, chunk_by_words};
pub use normalize::{normalize_whitespace, word_count};
pub use segment::split_sentences;
