use axum::{extract::State, response::Html, response::IntoResponse, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

use crate::dtos::{EssayRequest, EssayResponse, SummarizeRequest, SummarizeResponse};
use crate::services::GenerationError;
use crate::AppState;

/// API endpoint for the summarizer.
pub async fn summarize(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SummarizeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let summary = state
        .generation
        .summarize(&req.text, req.length)
        .await
        .map_err(map_generation_error)?;

    Ok(Json(SummarizeResponse { summary }))
}

/// API endpoint for the essay writer.
pub async fn generate_essay(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EssayRequest>,
) -> Result<impl IntoResponse, AppError> {
    let essay = state
        .generation
        .compose_essay(&req.topic)
        .await
        .map_err(map_generation_error)?;

    Ok(Json(EssayResponse { essay }))
}

fn map_generation_error(err: GenerationError) -> AppError {
    match err {
        GenerationError::EmptyInput(msg) => AppError::BadRequest(anyhow::anyhow!(msg)),
        GenerationError::Provider(e) => {
            tracing::error!(error = %e, "Text generation failed");
            AppError::UpstreamError(format!("Text generation failed: {}", e))
        }
    }
}

/// Summarizer landing page.
pub async fn home() -> impl IntoResponse {
    Html(include_str!("../../templates/index.html"))
}

/// Essay writer page.
pub async fn essay_writer() -> impl IntoResponse {
    Html(include_str!("../../templates/essay_writer.html"))
}

/// Service health check.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.config.service_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
