//! Graph snapshot handler.

use axum::extract::State;
use axum::Json;

use hobnet_core::GraphSnapshot;

use crate::state::AppState;

/// Returns the full node/edge snapshot, built fresh from current state.
///
/// `GET /graph`
pub async fn graph_snapshot(State(state): State<AppState>) -> Json<GraphSnapshot> {
    let service = state.service.read().await;
    Json(service.graph_snapshot())
}
