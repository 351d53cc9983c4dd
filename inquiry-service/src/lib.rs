pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::InquiryConfig;
use crate::services::InquiryResponder;

#[derive(Clone)]
pub struct AppState {
    pub config: InquiryConfig,
    pub responder: Arc<InquiryResponder>,
}

pub async fn build_router(state: AppState) -> Result<Router, AppError> {
    let allowed_origin = state
        .config
        .security
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "Invalid CORS origin '{}': {}",
                state.config.security.allowed_origin,
                e
            ))
        })?;

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/ask", post(handlers::ask))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        );

    Ok(app)
}
