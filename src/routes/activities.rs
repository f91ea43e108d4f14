// src/routes/activities.rs

use axum::{extract::State, http::StatusCode, Json};

use super::internal_error;
use crate::{models::ActivityItem, AppState};

/// GET /activities: the ten most recent log entries, newest first.
pub async fn list_recent(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityItem>>, (StatusCode, String)> {
    let rows = state.store.recent_activities().await.map_err(internal_error)?;
    Ok(Json(rows))
}
