// src/routes/mod.rs

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub mod activities;
pub mod dashboard;
pub mod health;
pub mod performance;
pub mod shifts;

// Common error mapper
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    tracing::error!(error = %e, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/dashboard/summary", get(dashboard::get_summary))
        .route("/activities", get(activities::list_recent))
        .route("/performance", get(performance::list_performance))
        .route("/shifts", get(shifts::list_shifts))
        .with_state(state)
        // the dashboard UI is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
