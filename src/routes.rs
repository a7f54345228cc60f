use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

// Builds the public router. The auth.enabled flag selects between the two
// revisions of the service: the open variant exposes the pages directly,
// the gated variant adds /login and puts the bearer check ahead of them.
// The task list is public in both.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new().route("/page/:page_id", get(handlers::get_page));

    let app = if state.config.auth.enabled {
        Router::new()
            .route("/login", post(handlers::login))
            .merge(pages.layer(from_fn_with_state(state.clone(), middleware::require_auth)))
    } else {
        pages
    };

    app.route("/", get(handlers::list_tasks))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
