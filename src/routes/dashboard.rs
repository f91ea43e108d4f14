// src/routes/dashboard.rs

use axum::{extract::State, http::StatusCode, Json};

use super::internal_error;
use crate::{models::DashboardSummary, AppState};

/// GET /dashboard/summary
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, (StatusCode, String)> {
    let summary = state.store.summary().await.map_err(internal_error)?;
    Ok(Json(summary))
}
