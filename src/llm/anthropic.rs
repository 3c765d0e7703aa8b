use async_trait::async_trait;

use super::error::Result;
use super::provider::Provider;
use super::types::Message;

/// Placeholder text returned instead of a completion
pub const PLACEHOLDER_TEXT: &str = "Anthropic integration not yet implemented";

/// Stand-in for the Anthropic integration. `invoke` short-circuits with a
/// fixed message and performs no network call; downstream validation rejects
/// the placeholder like any other non-conforming output.
pub struct AnthropicProvider;

#[async_trait]
impl Provider for AnthropicProvider {
    async fn invoke(
        &self,
        _messages: &[Message],
        _model: &str,
        _temperature: f32,
        _api_key: &str,
    ) -> Result<String> {
        Ok(PLACEHOLDER_TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_short_circuit_returns_placeholder() {
        let provider = AnthropicProvider;
        let text = provider
            .invoke(&[Message::user("anything")], "claude-3-opus-20240229", 0.5, "key")
            .await
            .unwrap();
        assert_eq!(text, PLACEHOLDER_TEXT);
    }
}
