//! The user record and its mutation inputs.
//!
//! [`User`] is the only persistent entity. Friendships are not stored as a
//! first-class entity; a friendship is the symmetric presence of two ids in
//! each other's `friends` set, maintained by the consistency engine.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A member of the network.
///
/// `friends` is symmetric and irreflexive by construction -- nothing outside
/// [`SocialGraph`](crate::engine::SocialGraph) mutates it. `hobbies` rejects
/// exact duplicates while preserving insertion order for display.
/// `popularity_score` is derived; it is refreshed by the engine whenever any
/// of its inputs change and is never set by a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: UserId,
    /// Display name, unique across the network.
    pub username: String,
    /// Age in years, validated to [1, 150].
    pub age: u32,
    /// Hobby tags, unique within the user, insertion order preserved.
    pub hobbies: IndexSet<String>,
    /// Ids of this user's friends. If `b` appears here, `a` appears in
    /// `b.friends` as well.
    pub friends: IndexSet<UserId>,
    /// Set once at creation, immutable.
    pub created_at: DateTime<Utc>,
    /// Derived connectivity score; see [`crate::score`].
    pub popularity_score: f64,
}

impl User {
    /// Creates a record with a fresh id, the current timestamp, no friends,
    /// and a zero score. The engine refreshes the score right after insert
    /// so non-zero baselines from custom policies are honored too.
    pub fn new(username: String, age: u32, hobbies: IndexSet<String>) -> Self {
        User {
            id: UserId::new(),
            username,
            age,
            hobbies,
            friends: IndexSet::new(),
            created_at: Utc::now(),
            popularity_score: 0.0,
        }
    }

    /// Returns `true` if `other` is in this user's friends set.
    pub fn is_friend(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// Number of friends (the user's degree in the friendship graph).
    pub fn degree(&self) -> usize {
        self.friends.len()
    }
}

/// Input for creating a user. Hobbies are de-duplicated (case-sensitive,
/// first occurrence wins) before storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub age: u32,
    pub hobbies: Vec<String>,
}

/// Partial update: only fields that are `Some` are applied. A supplied
/// `hobbies` list fully replaces the stored set after de-duplication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub age: Option<u32>,
    pub hobbies: Option<Vec<String>>,
}

/// De-duplicates a tag list into an insertion-ordered set, keeping the first
/// occurrence of each exact (case-sensitive) tag.
pub fn hobby_set(tags: Vec<String>) -> IndexSet<String> {
    tags.into_iter().collect()
}
