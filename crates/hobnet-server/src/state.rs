//! Application state with a shared `GraphService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::RwLock<>>` for use
//! with axum handlers. Mutating handlers take the write lock, so writes are
//! fully serialized and a link/unlink dual update commits as one unit --
//! no reader can observe the relation updated on one side only. Read
//! handlers share the read lock and run concurrently with each other.
//! The async-aware lock is awaited without blocking the tokio runtime.

use std::sync::Arc;

use crate::service::GraphService;

/// Shared application state for the HTTP server.
#[derive(Clone, Default)]
pub struct AppState {
    /// The shared graph service (async RwLock -- serialized writes,
    /// concurrent reads).
    pub service: Arc<tokio::sync::RwLock<GraphService>>,
}

impl AppState {
    /// Creates a new `AppState` over an empty in-memory graph.
    pub fn new() -> Self {
        AppState {
            service: Arc::new(tokio::sync::RwLock::new(GraphService::new())),
        }
    }
}
