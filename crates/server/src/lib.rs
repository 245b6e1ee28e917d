pub mod error;
pub mod handlers;
pub mod pages;
pub mod reddit_stream;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/reddit-stream/", get(handlers::reddit_stream))
        .route("/generate/", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
