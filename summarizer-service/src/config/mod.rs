use serde::Deserialize;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;
use std::env;

/// Ceiling on generated output tokens per request.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Bound on the outbound generation call.
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub anthropic: AnthropicConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// API key; an empty key leaves the provider in its unconfigured state.
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_day: u32,
    pub requests_per_hour: u32,
    pub summarize_per_minute: u32,
    pub essay_per_minute: u32,
}

impl SummarizerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(SummarizerConfig {
            common,
            service_name: get_env("SERVICE_NAME", Some("summarizer-service"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            anthropic: AnthropicConfig {
                api_key: get_env("ANTHROPIC_API_KEY", Some(""), is_prod)?,
                model: get_env(
                    "ANTHROPIC_MODEL",
                    Some("claude-3-haiku-20240307"),
                    is_prod,
                )?,
                timeout_seconds: get_env(
                    "ANTHROPIC_TIMEOUT_SECONDS",
                    Some(&DEFAULT_TIMEOUT_SECONDS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
                max_output_tokens: get_env(
                    "ANTHROPIC_MAX_OUTPUT_TOKENS",
                    Some(&DEFAULT_MAX_OUTPUT_TOKENS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
            },
            rate_limit: RateLimitConfig {
                requests_per_day: get_env("RATE_LIMIT_PER_DAY", Some("200"), is_prod)?
                    .parse()
                    .unwrap_or(200),
                requests_per_hour: get_env("RATE_LIMIT_PER_HOUR", Some("50"), is_prod)?
                    .parse()
                    .unwrap_or(50),
                summarize_per_minute: get_env("RATE_LIMIT_SUMMARIZE_PER_MINUTE", Some("10"), is_prod)?
                    .parse()
                    .unwrap_or(10),
                essay_per_minute: get_env("RATE_LIMIT_ESSAY_PER_MINUTE", Some("5"), is_prod)?
                    .parse()
                    .unwrap_or(5),
            },
        })
    }
}
