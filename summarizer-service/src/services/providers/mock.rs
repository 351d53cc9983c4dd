//! Mock provider implementation for testing.

use super::{Completion, ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing.
///
/// Echoes both prompts back so tests can observe prompt construction.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        _max_tokens: u32,
    ) -> Result<Completion, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(Completion {
            text: format!("Mock completion [{}]: {}", system_prompt, user_prompt),
            input_tokens: (system_prompt.len() + user_prompt.len()) as i32 / 4,
            output_tokens: 10,
        })
    }
}
