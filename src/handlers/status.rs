//! Status and health check endpoints
//!
//! Fixed payloads for monitoring and liveness probes.

use axum::Json;
use serde::Serialize;

/// Fixed status payload
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// GET /api/digital-twin handler
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Digital Twin Service is running",
    })
}

/// GET /api/digital-twin/health handler
pub async fn health_handler() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}
