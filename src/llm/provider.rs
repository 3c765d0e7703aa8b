use async_trait::async_trait;

use super::anthropic::AnthropicProvider;
use super::error::Result;
use super::gemini::GeminiProvider;
use super::openai::OpenAiProvider;
use super::types::{Message, ProviderKind};

/// One LLM provider integration. A single invocation is a single provider
/// round-trip; no retry or backoff happens at this layer.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send the prompt pair to the provider and return the top completion's
    /// text. The credential is used for this one call and must not be
    /// retained or logged.
    async fn invoke(
        &self,
        messages: &[Message],
        model: &str,
        temperature: f32,
        api_key: &str,
    ) -> Result<String>;
}

/// Immutable registry of one provider implementation per `ProviderKind`.
/// Lookup is total over the closed enum.
pub struct ProviderRegistry {
    gemini: Box<dyn Provider>,
    openai: Box<dyn Provider>,
    anthropic: Box<dyn Provider>,
}

impl ProviderRegistry {
    /// Registry with the real provider endpoints
    pub fn new() -> Result<Self> {
        Ok(Self {
            gemini: Box::new(GeminiProvider::new()?),
            openai: Box::new(OpenAiProvider::new()?),
            anthropic: Box::new(AnthropicProvider),
        })
    }

    /// Replace one entry, e.g. with a mock-backed provider in tests
    pub fn with_provider(mut self, kind: ProviderKind, provider: Box<dyn Provider>) -> Self {
        match kind {
            ProviderKind::Gemini => self.gemini = provider,
            ProviderKind::OpenAi => self.openai = provider,
            ProviderKind::Anthropic => self.anthropic = provider,
        }
        self
    }

    pub fn get(&self, kind: ProviderKind) -> &dyn Provider {
        match kind {
            ProviderKind::Gemini => self.gemini.as_ref(),
            ProviderKind::OpenAi => self.openai.as_ref(),
            ProviderKind::Anthropic => self.anthropic.as_ref(),
        }
    }
}
