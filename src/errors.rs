use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Failed to parse model output: {0}")]
    Parse(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to access generation endpoint: {0}")]
    Api(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::Parse(error.to_string())
    }
}
