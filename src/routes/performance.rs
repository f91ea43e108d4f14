// src/routes/performance.rs

use axum::{extract::State, http::StatusCode, Json};

use super::internal_error;
use crate::{models::PerformancePoint, AppState};

/// GET /performance: every row, for the dashboard line chart.
pub async fn list_performance(
    State(state): State<AppState>,
) -> Result<Json<Vec<PerformancePoint>>, (StatusCode, String)> {
    let rows = state.store.performance().await.map_err(internal_error)?;
    Ok(Json(rows))
}
