use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        message: "Shri Selvam Tiles Backend Server",
        timestamp: Utc::now().to_rfc3339(),
    })
}
