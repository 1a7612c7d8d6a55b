//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::AppState;

/// GET /health - Service identity, version, and configured network
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.config().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "satlend-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        network: config.network,
    })
}
