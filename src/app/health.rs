//! 健康检查

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.products.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected",
                "timestamp": chrono::Utc::now()
            })),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "database": e.to_string(),
                    "timestamp": chrono::Utc::now()
                })),
            )
        }
    }
}
