//! Text generation gateway.
//!
//! Builds the fixed system/user prompt pairs for summarization and essay
//! writing and delegates to the injected [`TextProvider`]. Failures are a
//! discriminated [`GenerationError`], never tagged strings.

use crate::services::providers::{ProviderError, TextProvider};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Requested summary length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// Length-specific instruction appended to the summarization system prompt.
    fn instruction(self) -> &'static str {
        match self {
            SummaryLength::Short => "Provide a very brief, one-paragraph summary.",
            SummaryLength::Medium => {
                "Provide a detailed summary that is a few paragraphs long."
            }
            SummaryLength::Long => {
                "Provide a comprehensive and detailed summary, covering all key points thoroughly."
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    EmptyInput(&'static str),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Gateway over the external text-generation API.
#[derive(Clone)]
pub struct GenerationService {
    provider: Arc<dyn TextProvider>,
    max_output_tokens: u32,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn TextProvider>, max_output_tokens: u32) -> Self {
        Self {
            provider,
            max_output_tokens,
        }
    }

    /// Summarize text to the requested length.
    pub async fn summarize(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<String, GenerationError> {
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyInput("Input text cannot be empty."));
        }

        let system_prompt = format!(
            "You are a world-class expert in summarizing text. Your goal is to provide a clear and concise summary of the provided content. {}",
            length.instruction()
        );
        let user_prompt = format!("Please summarize the following text:\n\n{}", text);

        let completion = self
            .provider
            .complete(&system_prompt, &user_prompt, self.max_output_tokens)
            .await?;

        tracing::debug!(
            input_tokens = completion.input_tokens,
            output_tokens = completion.output_tokens,
            "Summary generated"
        );

        Ok(completion.text)
    }

    /// Compose an essay on the given topic.
    pub async fn compose_essay(&self, topic: &str) -> Result<String, GenerationError> {
        if topic.trim().is_empty() {
            return Err(GenerationError::EmptyInput("Essay topic cannot be empty."));
        }

        let system_prompt = "You are a helpful and knowledgeable writing assistant. Write a well-structured essay with an introduction, body, and conclusion.";
        let user_prompt = format!("Please write an essay on the following topic: {}", topic);

        let completion = self
            .provider
            .complete(system_prompt, &user_prompt, self.max_output_tokens)
            .await?;

        tracing::debug!(
            input_tokens = completion.input_tokens,
            output_tokens = completion.output_tokens,
            "Essay generated"
        );

        Ok(completion.text)
    }
}
