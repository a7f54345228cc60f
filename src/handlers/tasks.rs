use axum::{extract::State, Json};

use crate::models::Task;
use crate::state::AppState;

// GET / returns the full task table verbatim. The records describe requests
// the client under test is expected to perform; nothing here executes them.
pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    tracing::debug!("Serving {} task records", state.tasks.len());
    Json(state.tasks.as_ref().clone())
}
