//! Text-generation provider abstraction.
//!
//! A single trait seam over the external generation API so handlers and the
//! generation service never talk to a concrete backend directly, and tests
//! can swap in a mock.

pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The client was never configured; the message is fixed so callers see
    /// the same failure on every attempt.
    #[error("{0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Result of a single completion request.
#[derive(Debug)]
pub struct Completion {
    /// Generated text.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Trait for text generation providers (e.g. Anthropic).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Issue one generation request with a bounded output-token ceiling.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<Completion, ProviderError>;
}
