pub mod anthropic;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod provider;
pub mod types;

#[cfg(test)]
mod response_test;

pub use anthropic::{AnthropicProvider, PLACEHOLDER_TEXT};
pub use error::LlmError;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use provider::{Provider, ProviderRegistry};
pub use types::{Message, ProviderKind, Role};
