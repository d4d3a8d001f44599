use crate::app::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{AskRequest, AskResponse, HealthResponse};
use axum::{
    extract::{Json, State, rejection::JsonRejection},
    response::Json as ResponseJson,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");

    Ok(ResponseJson(HealthResponse::ok()))
}

/// Ask handler
/// Accepts `{"prompt": "..."}`, forwards it to the generator once and returns the answer
pub async fn ask_gemini(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<ResponseJson<AskResponse>> {
    let Json(body) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::JsonDataError(_) => {
            warn!("Rejected non-JSON request: {}", rejection.body_text());
            AppError::NotJson
        }
        other => {
            warn!("Failed to read request body: {}", other.body_text());
            AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            }
        }
    })?;

    let request = AskRequest::from_json(&body).inspect_err(|_| {
        warn!("Rejected request without a prompt");
    })?;
    info!("Ask endpoint called with prompt: {}", request.prompt);

    let answer = state.generator.generate(&request.full_prompt()).await?;

    info!("Successfully generated answer ({} chars)", answer.len());
    Ok(ResponseJson(AskResponse::new(answer)))
}
