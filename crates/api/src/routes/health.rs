use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process answers.
    pub status: &'static str,
    /// Current server time, RFC 3339 in UTC.
    pub timestamp: String,
}

/// GET /health -- liveness only; the store is not consulted.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Mount health check routes. Used both at root level and under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
