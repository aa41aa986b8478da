//! GraphService: the single coordinator between HTTP handlers and the core
//! graph engine.
//!
//! All command-service logic flows through [`GraphService`]. Handlers are
//! thin wrappers that delegate to these methods; request-shape validation
//! (required fields, numeric and UUID parsing) happens at the extractor
//! layer, domain rules in the engine.

use hobnet_core::{GraphSnapshot, SocialGraph, UserId};

use crate::error::ApiError;
use crate::schema::users::{CreateUserRequest, UpdateUserRequest, UserView};

/// The command service over the relationship graph.
#[derive(Default)]
pub struct GraphService {
    graph: SocialGraph,
}

impl GraphService {
    /// Creates a service over an empty in-memory graph.
    pub fn new() -> Self {
        GraphService {
            graph: SocialGraph::new(),
        }
    }

    /// Lists all users in insertion order.
    pub fn list_users(&self) -> Vec<UserView> {
        self.graph.users().into_iter().map(UserView::from).collect()
    }

    /// Returns a single user.
    pub fn get_user(&self, id: UserId) -> Result<UserView, ApiError> {
        Ok(self.graph.user(id)?.into())
    }

    /// Creates a user.
    pub fn create_user(&mut self, req: CreateUserRequest) -> Result<UserView, ApiError> {
        Ok(self.graph.create_user(req.into())?.into())
    }

    /// Applies a partial update to a user.
    pub fn update_user(
        &mut self,
        id: UserId,
        req: UpdateUserRequest,
    ) -> Result<UserView, ApiError> {
        Ok(self.graph.update_user(id, req.into())?.into())
    }

    /// Deletes a user; refused while friendships exist.
    pub fn delete_user(&mut self, id: UserId) -> Result<(), ApiError> {
        Ok(self.graph.delete_user(id)?)
    }

    /// Links two users as friends; returns the updated first user.
    pub fn link_users(&mut self, id: UserId, friend_id: UserId) -> Result<UserView, ApiError> {
        Ok(self.graph.link_users(id, friend_id)?.into())
    }

    /// Removes the friendship between two users; returns the updated first
    /// user.
    pub fn unlink_users(&mut self, id: UserId, friend_id: UserId) -> Result<UserView, ApiError> {
        Ok(self.graph.unlink_users(id, friend_id)?.into())
    }

    /// Appends a hobby tag to a user.
    pub fn add_hobby(&mut self, id: UserId, hobby: &str) -> Result<UserView, ApiError> {
        Ok(self.graph.add_hobby(id, hobby)?.into())
    }

    /// Builds the node/edge snapshot for rendering.
    pub fn graph_snapshot(&self) -> GraphSnapshot {
        self.graph.snapshot()
    }
}
