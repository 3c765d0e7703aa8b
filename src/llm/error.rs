use thiserror::Error;

/// LLM-provider errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuildFailed(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Transport failure. Constructed via `Error::without_url` so the
    /// rendered error cannot carry a credential embedded in the request URL
    #[error("Network error: {0}")]
    Network(reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LlmError>;
