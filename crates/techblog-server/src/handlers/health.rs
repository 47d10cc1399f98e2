use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }

    pub fn down() -> Self {
        Self {
            status: "DOWN".to_string(),
        }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::up()
    }
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store().health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::up())),
        Err(err) => {
            tracing::warn!(store = state.store().name(), error = %err, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::down()))
        },
    }
}
