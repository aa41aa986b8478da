//! Router assembly for the hobnet HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive so the
/// browser UI can be served from any origin. TraceLayer provides
/// request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Service status
        .route("/", get(handlers::status::service_status))
        // User management
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        // Hobby tagging
        .route("/users/{id}/hobbies", post(handlers::users::add_hobby))
        // Friendships
        .route("/users/{id}/link", post(handlers::links::link_users))
        .route("/users/{id}/unlink", delete(handlers::links::unlink_users))
        // Graph snapshot
        .route("/graph", get(handlers::graph::graph_snapshot))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
