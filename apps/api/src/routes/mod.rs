pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::posting::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_index))
        .route("/generate", post(handlers::handle_generate))
        .route("/download", post(handlers::handle_download))
        .with_state(state)
}
