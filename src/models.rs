use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Instruction placed in front of every user question before it goes upstream
pub const PROMPT_PREFIX: &str =
    "You are Space Nova, a helpful AI assistant for space exploration. Answer the following question: ";

/// Request payload for the ask endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

/// Response payload for the ask endpoint
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}

impl AskRequest {
    /// Validates an already-parsed JSON body.
    ///
    /// The body must be an object with a non-empty `prompt`. Strings are taken as-is,
    /// whitespace included. Non-zero numbers are forwarded in their JSON text form.
    /// Zero, `null`, booleans, arrays and objects count as no prompt.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let prompt = match body.get("prompt") {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(Value::Number(number)) if number.as_f64() != Some(0.0) => number.to_string(),
            _ => return Err(AppError::MissingPrompt),
        };
        Ok(Self { prompt })
    }

    /// Prompt text as submitted upstream
    pub fn full_prompt(&self) -> String {
        format!("{}{}", PROMPT_PREFIX, self.prompt)
    }
}

impl AskResponse {
    pub fn new(answer: String) -> Self {
        Self { answer }
    }
}
