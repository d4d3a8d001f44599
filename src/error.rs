use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

pub const NOT_JSON_MESSAGE: &str = "Request must be JSON";
pub const MISSING_PROMPT_MESSAGE: &str = "Missing 'prompt' in request body";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Custom error type for the application
#[derive(Debug)]
pub enum AppError {
    NotJson,
    MissingPrompt,
    /// Body could not be read at all; keeps the status axum chose
    Rejected { status: StatusCode, message: String },
    /// Upstream failure; the cause is logged and never sent to the caller
    Upstream(anyhow::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotJson => (StatusCode::BAD_REQUEST, NOT_JSON_MESSAGE.to_string()),
            AppError::MissingPrompt => (
                StatusCode::BAD_REQUEST,
                MISSING_PROMPT_MESSAGE.to_string(),
            ),
            AppError::Rejected { status, message } => (status, message),
            AppError::Upstream(err) => {
                error!("An unexpected error occurred: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Upstream(err)
    }
}

/// Result type for application handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotJson.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingPrompt.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream(anyhow::anyhow!("quota exceeded"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rejected_keeps_status() {
        let response = AppError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "Failed to buffer the request body: length limit exceeded".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
