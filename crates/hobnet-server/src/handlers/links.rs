//! Friendship handlers (link, unlink).
//!
//! Both operations treat the pair as one atomic unit: the dual adjacency
//! update and both score refreshes happen under the state write lock.

use axum::extract::{Path, State};
use axum::Json;

use hobnet_core::UserId;

use crate::error::ApiError;
use crate::schema::users::{LinkRequest, UserView};
use crate::state::AppState;

/// Creates the symmetric friendship between the path user and
/// `friend_id`. Already-linked pairs succeed as a no-op.
///
/// `POST /users/{id}/link`
pub async fn link_users(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<LinkRequest>,
) -> Result<Json<UserView>, ApiError> {
    let mut service = state.service.write().await;
    Ok(Json(service.link_users(id, req.friend_id)?))
}

/// Removes the friendship between the path user and `friend_id`.
/// Not-linked pairs succeed as a no-op.
///
/// `DELETE /users/{id}/unlink`
pub async fn unlink_users(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<LinkRequest>,
) -> Result<Json<UserView>, ApiError> {
    let mut service = state.service.write().await;
    Ok(Json(service.unlink_users(id, req.friend_id)?))
}
