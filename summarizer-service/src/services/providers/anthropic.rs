//! Anthropic provider implementation.
//!
//! Implements text generation against the Anthropic Messages API with a
//! fixed model identifier and a bounded request timeout.

use super::{Completion, ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anthropic API base URL.
const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";

/// API version header required on every request.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fixed message returned whenever the client is unconfigured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Anthropic API client is not configured. Please check your API key.";

/// Anthropic provider configuration.
#[derive(Debug, Clone)]
pub struct AnthropicProviderConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Anthropic text provider.
pub struct AnthropicTextProvider {
    config: AnthropicProviderConfig,
    client: Client,
}

impl AnthropicTextProvider {
    pub fn new(config: AnthropicProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }
}

#[async_trait]
impl TextProvider for AnthropicTextProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<Completion, ProviderError> {
        // Configuration is checked before any network I/O so the failure is
        // identical on every call.
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                NOT_CONFIGURED_MESSAGE.to_string(),
            ));
        }

        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens,
            system: system_prompt.to_string(),
            messages: vec![Message {
                role: "user",
                content: user_prompt.to_string(),
            }],
        };

        let url = format!("{}/messages", ANTHROPIC_API_BASE);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = user_prompt.len(),
            "Sending request to Anthropic API"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::Api(format!(
                "Anthropic API error {}: {}",
                status, error_text
            )));
        }

        let api_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Api(format!("Failed to parse response: {}", e)))?;

        let text = api_response
            .content
            .iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text.clone())
            .ok_or_else(|| {
                ProviderError::Api("Response contained no text content".to_string())
            })?;

        let usage = api_response.usage.unwrap_or_default();

        Ok(Completion {
            text,
            input_tokens: usage.input_tokens.unwrap_or(0),
            output_tokens: usage.output_tokens.unwrap_or(0),
        })
    }
}

// ============================================================================
// Anthropic API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    input_tokens: Option<i32>,
    output_tokens: Option<i32>,
}
