pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::rate_limit::{ip_rate_limit_middleware, RouteRateLimit};
use tower_http::trace::TraceLayer;

use crate::config::SummarizerConfig;
use crate::services::GenerationService;

#[derive(Clone)]
pub struct AppState {
    pub config: SummarizerConfig,
    pub generation: GenerationService,
    pub daily_rate_limit: RouteRateLimit,
    pub hourly_rate_limit: RouteRateLimit,
    pub summarize_rate_limit: RouteRateLimit,
    pub essay_rate_limit: RouteRateLimit,
}

pub async fn build_router(state: AppState) -> Result<Router, AppError> {
    // Per-route ceilings sit inside the global ones, so a summarize burst is
    // rejected by its own limit before it eats into the daily budget check.
    let summarize_route = Router::new()
        .route("/summarize", post(handlers::summarize))
        .layer(from_fn_with_state(
            state.summarize_rate_limit.clone(),
            ip_rate_limit_middleware,
        ));

    let essay_route = Router::new()
        .route("/generate-essay", post(handlers::generate_essay))
        .layer(from_fn_with_state(
            state.essay_rate_limit.clone(),
            ip_rate_limit_middleware,
        ));

    let app = Router::new()
        .route("/", get(handlers::home))
        .route("/essay-writer", get(handlers::essay_writer))
        .route("/health", get(handlers::health_check))
        .merge(summarize_route)
        .merge(essay_route)
        .with_state(state.clone())
        // Global per-client ceilings apply to every route
        .layer(from_fn_with_state(
            state.hourly_rate_limit.clone(),
            ip_rate_limit_middleware,
        ))
        .layer(from_fn_with_state(
            state.daily_rate_limit.clone(),
            ip_rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ));

    Ok(app)
}
