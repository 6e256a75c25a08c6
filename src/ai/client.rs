//! LLM (Gemini) API client module
//!
//! Encapsulates the HTTP round-trip to the Gemini generation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use super::TextCompletion;
use crate::errors::SummarizeError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Generation requests cover multi-thousand-word chunks; allow slow models.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Gemini API client for generating summary sections.
///
/// Construct once per process and share by reference; the underlying
/// reqwest client pools connections across calls.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns a fatal configuration error when `api_key` is blank, or an
    /// HTTP error when the client cannot be constructed.
    pub fn new(api_key: String, model: String) -> Result<Self, SummarizeError> {
        Self::with_timeout(api_key, model, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Same as [`GeminiClient::new`] with a caller-chosen request timeout.
    ///
    /// # Errors
    ///
    /// Returns a fatal configuration error when `api_key` is blank, or an
    /// HTTP error when the client cannot be constructed.
    pub fn with_timeout(
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, SummarizeError> {
        if api_key.trim().is_empty() {
            return Err(SummarizeError::Config(
                "GEMINI_API_KEY not found. Create a .env file and set GEMINI_API_KEY=your_key_here"
                    .to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SummarizeError::Http(format!("Failed to build Gemini HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    /// The model identifier requests are sent to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, SummarizeError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{prompt}");

        info!(
            "Calling Gemini model {} with ~{} input tokens",
            self.model,
            estimate_tokens(prompt)
        );

        let request_body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::Http(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::Api(format!(
                "Gemini API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SummarizeError::Api(format!("Failed to parse Gemini response: {e}")))?;

        let text_opt = response_json
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(Value::as_str))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .filter(|text| !text.is_empty());

        text_opt.ok_or_else(|| SummarizeError::Api("No text in response".to_string()))
    }
}
