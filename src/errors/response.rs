use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::AppError;

// The IntoResponse trait implementation converts AppError into a well-formed
// HTTP response. All rejection bodies share the {"message": ...} shape.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Authentication failures are 401s with the variant's message
            AppError::InvalidCredentials
            | AppError::TokenMissing
            | AppError::InvalidToken
            | AppError::InvalidUser => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),

            // Unexpected faults are internal server errors; the detail stays
            // in the log, not the response
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
