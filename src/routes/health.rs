// src/routes/health.rs

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResp { pub status: &'static str, pub version: &'static str }

/// GET /health. Does not touch the database.
pub async fn health() -> Json<HealthResp> {
    Json(HealthResp { status: "ok", version: "v1" })
}
