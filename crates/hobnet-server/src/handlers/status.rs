//! Service status handler.

use axum::Json;

/// Reports that the service is up.
///
/// `GET /`
pub async fn service_status() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "hobnet",
        "status": "running",
    }))
}
