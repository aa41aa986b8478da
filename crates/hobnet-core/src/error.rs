//! Core error types for hobnet-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! domain failure taxonomy: validation, not-found, and conflicts.

use thiserror::Error;

use crate::id::UserId;

/// Domain errors produced by the hobnet-core crate.
///
/// Every rejected operation leaves the graph unchanged; validation runs
/// before any write is applied.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A user id was not found in the store.
    #[error("user not found: {id}")]
    UserNotFound { id: UserId },

    /// Attempting to insert a record whose id is already present.
    #[error("duplicate user id: {id}")]
    DuplicateId { id: UserId },

    /// Attempting to take a username another user already holds.
    #[error("username '{username}' already exists")]
    UsernameTaken { username: String },

    /// A field value failed validation.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },

    /// Attempting to link a user with themselves.
    #[error("cannot create a friendship with yourself")]
    SelfLink,

    /// Deleting a user that still has friendships. Deletion never cascades.
    #[error("user {id} still has friendships; remove friendships first")]
    HasFriendships { id: UserId },
}
