use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of activities in the directory.
    pub activity_count: usize,
}

/// GET /health -- returns service status and directory size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let activity_count = state.activities.list_all().await.len();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        activity_count,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
