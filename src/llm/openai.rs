use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use super::error::{LlmError, Result};
use super::provider::Provider;
use super::types::{CompletionRequest, CompletionResponse, Message};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Output-length cap applied to OpenAI completions
const MAX_TOKENS: u32 = 1200;

/// OpenAI chat completion client
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different endpoint (used by HTTP mocks)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| LlmError::ClientBuildFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn invoke(
        &self,
        messages: &[Message],
        model: &str,
        temperature: f32,
        api_key: &str,
    ) -> Result<String> {
        let request = CompletionRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            temperature,
            max_tokens: Some(MAX_TOKENS),
        };

        let url = format!("{}/chat/completions", self.base_url);

        debug!(model, temperature, "sending OpenAI chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiError { status, message });
        }

        let completion = response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.without_url().to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("empty choice list".to_string()))
    }
}
