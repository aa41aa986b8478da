//! Stable ID newtype for users.
//!
//! [`UserId`] is a distinct newtype wrapper over a v4 UUID, providing type
//! safety so a raw `Uuid` from an unrelated context cannot be used where a
//! user id is expected. Ids are assigned once at creation and never reused.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable user identifier.
///
/// Serializes as a plain UUID string. The derived `Ord` gives the canonical
/// lower-id-first ordering used when emitting undirected friendship edges.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Allocates a fresh random id.
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        UserId::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        UserId(id)
    }
}
