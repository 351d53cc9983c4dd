use service_core::middleware::rate_limit::RouteRateLimit;
use service_core::observability::init_tracing;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use summarizer_service::{
    build_router,
    config::SummarizerConfig,
    services::providers::anthropic::{AnthropicProviderConfig, AnthropicTextProvider},
    services::providers::TextProvider,
    services::GenerationService,
    AppState,
};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), service_core::error::AppError> {
    // Load configuration - fail fast if invalid
    let config = SummarizerConfig::from_env()?;

    init_tracing(&config.service_name, &config.log_level);

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting summarizer service"
    );

    // Initialize the Anthropic text provider. An empty API key is allowed at
    // startup; every generation call then fails with the same
    // configuration error instead of the process refusing to boot.
    let provider_config = AnthropicProviderConfig {
        api_key: config.anthropic.api_key.clone(),
        model: config.anthropic.model.clone(),
        timeout: Duration::from_secs(config.anthropic.timeout_seconds),
    };
    if provider_config.api_key.is_empty() {
        tracing::warn!("ANTHROPIC_API_KEY is empty; generation requests will fail");
    }
    let provider: Arc<dyn TextProvider> = Arc::new(AnthropicTextProvider::new(provider_config));

    tracing::info!(
        model = %config.anthropic.model,
        "Initialized Anthropic text provider"
    );

    let generation = GenerationService::new(provider, config.anthropic.max_output_tokens);

    let state = AppState {
        generation,
        daily_rate_limit: RouteRateLimit::per_day(config.rate_limit.requests_per_day),
        hourly_rate_limit: RouteRateLimit::per_hour(config.rate_limit.requests_per_hour),
        summarize_rate_limit: RouteRateLimit::per_minute(config.rate_limit.summarize_per_minute),
        essay_rate_limit: RouteRateLimit::per_minute(config.rate_limit.essay_per_minute),
        config: config.clone(),
    };

    tracing::info!(
        per_day = config.rate_limit.requests_per_day,
        per_hour = config.rate_limit.requests_per_hour,
        summarize_per_minute = config.rate_limit.summarize_per_minute,
        essay_per_minute = config.rate_limit.essay_per_minute,
        "Rate limiters initialized"
    );

    let app = build_router(state).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
    tracing::info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
