use axum::extract::{Json, State};

use crate::errors::{AppError, AppResult};
use crate::models::{LoginRequest, TokenResponse};
use crate::state::AppState;

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    tracing::info!("Login attempt for user: {}", credentials.username);

    let user = state
        .users
        .verify_credentials(&credentials.username, &credentials.password)
        .ok_or_else(|| {
            tracing::warn!("Rejected credentials for user: {}", credentials.username);
            AppError::InvalidCredentials
        })?;

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

    tracing::debug!("Issued token for user id {}", user.id);
    Ok(Json(TokenResponse { token }))
}
