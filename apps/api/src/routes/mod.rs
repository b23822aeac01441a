pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::wordhunt::handlers;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/wordhunt/daily", get(handlers::handle_daily))
        .route("/api/wordhunt/submit", post(handlers::handle_submit))
        .route("/api/wordhunt/leaderboard", get(handlers::handle_leaderboard))
        .route("/api/wordhunt/me", get(handlers::handle_me))
        .fallback(not_found)
        .with_state(state)
}
