use axum::{
    body::Body,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::errors::{AppError, AppResult};
use crate::state::AppState;

// Bearer-token gate ahead of the page routes. The checks run in a fixed
// order with a 401 exit at each step: missing header, then signature and
// expiry, then user lookup.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> AppResult<Response> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AppError::TokenMissing)?;

    let token = header_value.to_str().map_err(|_| AppError::InvalidToken)?;
    // the original client sends the bare token, most tooling adds a scheme
    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        AppError::from(e)
    })?;

    let user = state
        .users
        .find_by_id(claims.user_id)
        .ok_or_else(|| {
            tracing::warn!("Token carries unknown user id {}", claims.user_id);
            AppError::InvalidUser
        })?
        .clone();

    tracing::debug!("Authenticated user {} (id {})", user.username, user.id);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
