//! All AI/LLM functionality

pub mod client;
pub mod generator;
pub mod prompt;
pub mod response;

use async_trait::async_trait;

use crate::errors::SummarizeError;

// Re-export main types for convenience
pub use client::{GeminiClient, estimate_tokens};
pub use generator::SectionGenerator;

/// The generation endpoint contract: one prompt in, raw untrusted text out.
///
/// The concrete model identifier is carried by the implementation, not the
/// call site. Everything above this seam treats the response defensively.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the endpoint is unreachable, rejects the
    /// request, or yields a response with no text.
    async fn complete(&self, prompt: &str) -> Result<String, SummarizeError>;
}
