//! User management handlers (list, get, create, update, delete, tag).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use hobnet_core::UserId;

use crate::error::ApiError;
use crate::schema::users::{AddHobbyRequest, CreateUserRequest, UpdateUserRequest, UserView};
use crate::state::AppState;

/// Lists all users.
///
/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserView>> {
    let service = state.service.read().await;
    Json(service.list_users())
}

/// Returns a single user.
///
/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserView>, ApiError> {
    let service = state.service.read().await;
    Ok(Json(service.get_user(id)?))
}

/// Creates a new user.
///
/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let mut service = state.service.write().await;
    let user = service.create_user(req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Applies a partial update to a user.
///
/// `PUT /users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserView>, ApiError> {
    let mut service = state.service.write().await;
    Ok(Json(service.update_user(id, req)?))
}

/// Deletes a user. Refused with 409 while friendships exist.
///
/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<StatusCode, ApiError> {
    let mut service = state.service.write().await;
    service.delete_user(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Appends a hobby tag to a user. Duplicates are a no-op success.
///
/// `POST /users/{id}/hobbies`
pub async fn add_hobby(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(req): Json<AddHobbyRequest>,
) -> Result<Json<UserView>, ApiError> {
    let mut service = state.service.write().await;
    Ok(Json(service.add_hobby(id, &req.hobby)?))
}
