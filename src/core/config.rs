use std::env;

use crate::errors::SummarizeError;

/// Free-tier friendly default model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a fatal configuration error when `GEMINI_API_KEY` is absent or
    /// blank. The message tells the operator how to supply the key.
    pub fn from_env() -> Result<Self, SummarizeError> {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(SummarizeError::Config(
                "GEMINI_API_KEY not found. Create a .env file and set GEMINI_API_KEY=your_key_here"
                    .to_string(),
            ));
        }

        let model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
        })
    }
}
