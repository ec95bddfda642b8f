//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl HealthResponse {
    fn new(status: &str, detail: Option<String>) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            detail,
        }
    }
}

/// Liveness endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy", None))
}

/// Readiness check (includes the application store)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let health = state.port.health_check().await;

    if health.is_operational() {
        (StatusCode::OK, Json(HealthResponse::new("ready", None)))
    } else {
        tracing::warn!(
            adapter = %health.adapter_id,
            message = ?health.message,
            "Readiness check failed"
        );
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::new("unavailable", health.message)),
        )
    }
}
