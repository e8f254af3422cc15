//! HTTP API server

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/api/bikes",
            get(handlers::list_bikes).post(handlers::create_bike),
        )
        .route("/api/bikes/:id", get(handlers::get_bike))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
