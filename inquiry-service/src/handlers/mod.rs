use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

use crate::dtos::{AskRequest, AskResponse};
use crate::services::normalize_query;
use crate::AppState;

/// Handle an inquiry submitted from the frontend.
pub async fn ask(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let query = normalize_query(&req.query);
    if query.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Query cannot be empty."
        )));
    }

    let reply = state.responder.respond(&query);

    tracing::debug!(category = ?reply.category, "Matched inquiry");

    Ok(Json(AskResponse {
        message: reply.message.to_string(),
        category: reply.category,
    }))
}

/// Service health check.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": state.config.service_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
