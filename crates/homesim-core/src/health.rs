//! Liveness probe shared by the HTTP services.
//!
//! Load balancers poll `GET /health` to decide whether an instance keeps
//! receiving traffic. The probe has no preconditions and no
//! authentication.

use axum::Json;

/// Body of the liveness probe response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthStatus {
    /// Always `"healthy"` while the process is serving.
    pub status: String,
}

impl HealthStatus {
    /// The fixed healthy status.
    pub fn healthy() -> Self {
        Self {
            status: String::from("healthy"),
        }
    }
}

/// `GET /health` handler.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
