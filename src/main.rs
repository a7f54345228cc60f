mod models;
mod handlers;
mod services;
mod middleware;
mod config;
mod errors;
mod state;
mod routes;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // Seed the static tables and build the router
    let state = AppState::new(config.clone());
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server");

    tracing::info!(
        "Mock inbox listening on {} (auth {})",
        addr,
        if config.auth.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
