use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::models::{ErrorResponse, HealthResponse, SimplifyRequest, SimplifyResponse};
use crate::app_state::AppState;
use crate::llm;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model_name.clone(),
    })
}

pub async fn eli5(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SimplifyRequest>,
) -> Result<Json<SimplifyResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Missing, null and empty text are all rejected the same way.
    let text = payload.text.as_deref().unwrap_or("");
    if text.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Text is required".to_string(),
            }),
        ));
    }

    tracing::info!(level = %payload.level, "simplify request");

    // Downstream failures still answer 200 with the fallback string in the
    // result field, so callers only branch on the validation error.
    let result = llm::simplify_text(state.generator.as_ref(), text, &payload.level).await;

    Ok(Json(SimplifyResponse { result }))
}
