use thiserror::Error;

/// Main application error type that aggregates domain-specific errors
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Configuration layer errors
    #[error(transparent)]
    Config(#[from] crate::config::error::ConfigError),

    /// LLM layer errors
    #[error(transparent)]
    Llm(#[from] crate::llm::error::LlmError),

    /// Generic I/O errors not covered by specific layers
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ForgeError>;

// Helper methods for creating specific errors
impl ForgeError {
    pub fn config(msg: impl Into<String>) -> Self {
        ForgeError::Config(crate::config::error::ConfigError::Invalid(msg.into()))
    }

    pub fn missing_input(field: impl Into<String>) -> Self {
        ForgeError::Config(crate::config::error::ConfigError::MissingField(field.into()))
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        ForgeError::Llm(crate::llm::error::LlmError::InvalidResponse(msg.into()))
    }
}
