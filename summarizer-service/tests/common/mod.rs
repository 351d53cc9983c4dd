//! Test helper module for summarizer-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use http_body_util::BodyExt;
use service_core::middleware::rate_limit::RouteRateLimit;
use std::sync::Arc;
use std::time::Duration;
use summarizer_service::{
    build_router,
    config::{AnthropicConfig, RateLimitConfig, SummarizerConfig},
    services::providers::anthropic::{AnthropicProviderConfig, AnthropicTextProvider},
    services::providers::mock::MockTextProvider,
    services::providers::TextProvider,
    services::GenerationService,
    AppState,
};

/// Limits high enough not to interfere with functional tests.
pub fn generous_limits() -> RateLimitConfig {
    RateLimitConfig {
        requests_per_day: 10_000,
        requests_per_hour: 10_000,
        summarize_per_minute: 10_000,
        essay_per_minute: 10_000,
    }
}

pub fn test_config(rate_limit: RateLimitConfig) -> SummarizerConfig {
    SummarizerConfig {
        common: service_core::config::Config { port: 0 },
        service_name: "summarizer-service-test".to_string(),
        log_level: "error".to_string(),
        anthropic: AnthropicConfig {
            api_key: String::new(),
            model: "claude-3-haiku-20240307".to_string(),
            timeout_seconds: 5,
            max_output_tokens: 1024,
        },
        rate_limit,
    }
}

/// Build the full router around an injected provider.
pub async fn test_router_with(
    provider: Arc<dyn TextProvider>,
    rate_limit: RateLimitConfig,
) -> Router {
    let config = test_config(rate_limit.clone());
    let generation = GenerationService::new(provider, config.anthropic.max_output_tokens);

    let state = AppState {
        generation,
        daily_rate_limit: RouteRateLimit::per_day(rate_limit.requests_per_day),
        hourly_rate_limit: RouteRateLimit::per_hour(rate_limit.requests_per_hour),
        summarize_rate_limit: RouteRateLimit::per_minute(rate_limit.summarize_per_minute),
        essay_rate_limit: RouteRateLimit::per_minute(rate_limit.essay_per_minute),
        config,
    };

    build_router(state).await.expect("Failed to build router")
}

/// Router with a working mock provider and generous limits.
pub async fn mock_router() -> Router {
    test_router_with(Arc::new(MockTextProvider::new(true)), generous_limits()).await
}

/// Router whose real provider was never given an API key.
pub async fn unconfigured_router() -> Router {
    let provider = AnthropicTextProvider::new(AnthropicProviderConfig {
        api_key: String::new(),
        model: "claude-3-haiku-20240307".to_string(),
        timeout: Duration::from_secs(5),
    });
    test_router_with(Arc::new(provider), generous_limits()).await
}

/// JSON POST request from a fixed client address.
pub fn json_post(uri: &str, body: &str, client_ip: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", client_ip)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
