pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS scoring API
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .route("/api/v1/ats/score/batch", post(handlers::handle_score_batch))
        .with_state(state)
}
