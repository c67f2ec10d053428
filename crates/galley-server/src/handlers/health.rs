use axum::Json;
use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
