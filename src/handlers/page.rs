use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::state::AppState;

// GET /page/{id} echoes the id back as a string, never reinterpreted as a
// number. The configured slow page simulates a hanging upstream: the handler
// parks its own task for the delay, leaving other in-flight requests alone.
pub async fn get_page(Path(page_id): Path<String>, State(state): State<AppState>) -> Json<Value> {
    if page_id == state.config.page.slow_page_id {
        tracing::debug!(
            "Delaying page {} for {}s",
            page_id,
            state.config.page.delay_seconds
        );
        tokio::time::sleep(Duration::from_secs(state.config.page.delay_seconds)).await;
    }

    Json(json!({ "page": page_id }))
}
