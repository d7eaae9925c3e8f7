use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the plan-generation pipeline and its storage layer.
///
/// Lookup misses (unknown meal, ingredient, goal or level label) are not
/// errors: every lookup has a defined fallback and the pipeline keeps going.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Malformed portion record: {0}")]
    MalformedPortion(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for PlanError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            PlanError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            PlanError::MalformedPortion(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Plan generation failed")
            }
            PlanError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
