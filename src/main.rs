//! Thin CLI host around the summarization pipeline.
//!
//! Reads a document from a file or stdin, runs map-reduce summarization,
//! prints the summary and key takeaways, and optionally writes the summary
//! to a plain-text file.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, warn};

use condense::ai::{GeminiClient, SectionGenerator};
use condense::core::config::AppConfig;
use condense::core::models::{
    DEFAULT_TAKEAWAYS, DEFAULT_TARGET_WORDS, MAX_TAKEAWAYS, MAX_TARGET_WORDS, MIN_TAKEAWAYS,
    MIN_TARGET_WORDS, SummaryOptions,
};
use condense::errors::SummarizeError;
use condense::summarize::{CANONICAL_FAILURE_MESSAGE, summarize_document};
use condense::text::word_count;
use condense::{input, setup_logging};

/// Inputs below this many words still summarize, but trivially.
const TRIVIAL_INPUT_WORDS: usize = 20;

#[derive(Debug, Parser)]
#[command(name = "condense", version, about = "Summarize long documents via map-reduce chunking")]
struct Cli {
    /// Input .txt file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Target summary length in words
    #[arg(long, default_value_t = DEFAULT_TARGET_WORDS as u32,
          value_parser = clap::value_parser!(u32).range(MIN_TARGET_WORDS as i64..=MAX_TARGET_WORDS as i64))]
    words: u32,

    /// Number of key takeaways
    #[arg(long, default_value_t = DEFAULT_TAKEAWAYS as u32,
          value_parser = clap::value_parser!(u32).range(MIN_TAKEAWAYS as i64..=MAX_TAKEAWAYS as i64))]
    takeaways: u32,

    /// Model identifier (overrides GEMINI_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 300)]
    timeout_seconds: u64,

    /// Write the summary to this file as plain text
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let raw_text = match &cli.input {
        Some(path) => input::read_document(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    if raw_text.trim().is_empty() {
        warn!("Please provide some text (paste via stdin or pass a valid .txt file)");
        std::process::exit(2);
    }
    if word_count(&raw_text) < TRIVIAL_INPUT_WORDS {
        warn!("Input is very short; results might be trivial");
    }

    let mut config = AppConfig::from_env()?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let client = GeminiClient::with_timeout(
        config.api_key,
        config.model,
        Duration::from_secs(cli.timeout_seconds),
    )?;
    let generator = SectionGenerator::new(client);
    let opts = SummaryOptions::clamped(cli.words as usize, cli.takeaways as usize);

    let result = match summarize_document(&generator, &raw_text, &opts).await {
        Ok(result) => result,
        Err(e @ SummarizeError::Input(_)) => {
            warn!("{e}");
            std::process::exit(2);
        }
        Err(e) => {
            error!("Failed to generate summary: {e}");
            eprintln!("{CANONICAL_FAILURE_MESSAGE}");
            std::process::exit(1);
        }
    };

    println!("Summary\n-------\n{}\n", result.summary.trim());
    println!("Key Takeaways\n-------------");
    for takeaway in &result.key_takeaways {
        println!("- {takeaway}");
    }

    if let Some(path) = cli.output {
        std::fs::write(&path, result.summary.trim().as_bytes())
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        println!("\nSaved summary to {}", path.display());
    }

    Ok(())
}
