//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use stockbook_shared::AppError;

use crate::{ApiResult, AppState};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Crate version of the running server.
    pub version: &'static str,
}

/// GET `/health` - Reports healthy once the database answers a ping.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    state
        .db
        .ping()
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
