use crate::app::AppState;
use crate::handlers::{ask_gemini, health_check};
use axum::{Router, extract::DefaultBodyLimit, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        // Prompts are forwarded whole, so the ask route carries no body size cap
        .route(
            "/api/ask_gemini",
            post(ask_gemini).layer(DefaultBodyLimit::disable()),
        )
}
