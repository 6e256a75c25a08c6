/// condense - Summarizes long documents with a bounded-context LLM via map-reduce chunking.
///
/// This crate implements the whole summarization pipeline:
/// 1. Text normalization and heuristic sentence segmentation
/// 2. Word-bounded chunk building with inter-chunk overlap
/// 3. Per-chunk summarization ("map") with proportional word budgets
/// 4. A final pass over the concatenated mini-summaries ("reduce")
///
/// # Architecture
///
/// The system uses:
/// - reqwest for HTTP calls to the Gemini generation endpoint
/// - serde/serde_json for defensive parsing of model output
/// - Tokio and futures for the fan-out/fan-in map step
/// - tracing for structured logging
///
/// # Example
///
/// ```no_run
/// use condense::ai::{GeminiClient, SectionGenerator};
/// use condense::core::config::AppConfig;
/// use condense::core::models::SummaryOptions;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     condense::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = GeminiClient::new(config.api_key, config.model)?;
///     let generator = SectionGenerator::new(client);
///
///     let result = condense::summarize::summarize_document(
///         &generator,
///         "A very long document...",
///         &SummaryOptions::default(),
///     )
///     .await?;
///
///     println!("Summary: {}", result.summary);
///     for takeaway in &result.key_takeaways {
///         println!("- {takeaway}");
///     }
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod input;
pub mod summarize;
pub mod text;

/// Configure structured logging for the summarizer binary.
///
/// Installs a tracing-subscriber fmt layer filtered by `RUST_LOG`, defaulting
/// to `info`. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
