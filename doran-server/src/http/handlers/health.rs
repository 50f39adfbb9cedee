//! GET /health: database ping, uptime, response time.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::time::Instant;

use crate::http::serve::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub db: &'static str,
    /// Seconds since the server started.
    pub uptime: u64,
    pub response_time_ms: u64,
    pub timestamp: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let start = Instant::now();
    let db_ok = sqlx::query("SELECT 1")
        .execute(state.pool_manager.pool())
        .await
        .is_ok();

    Json(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" },
        db: if db_ok { "connected" } else { "unreachable" },
        uptime: state.started_at.elapsed().as_secs(),
        response_time_ms: start.elapsed().as_millis() as u64,
        timestamp: Utc::now().to_rfc3339(),
    })
}
