// src/routes/shifts.rs

use axum::{extract::State, http::StatusCode, Json};

use super::internal_error;
use crate::{models::ShiftView, AppState};

/// GET /shifts: each shift with its employee's name and department.
pub async fn list_shifts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShiftView>>, (StatusCode, String)> {
    let rows = state.store.shifts().await.map_err(internal_error)?;
    Ok(Json(rows))
}
