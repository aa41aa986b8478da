//! The [`UserStore`] trait defining the Entity Store contract, plus the
//! in-memory backend.
//!
//! The store is an authoritative id -> record mapping with no business
//! rules; invariant enforcement lives in the engine. All backends implement
//! [`UserStore`] so they are fully swappable without changing engine logic.
//! [`InMemoryStore`] is the first-class backend: persistence engine choice
//! is out of scope for this service.

use indexmap::IndexMap;

use crate::error::GraphError;
use crate::id::UserId;
use crate::user::User;

/// The storage contract for user records.
///
/// The trait is synchronous (not async): the engine owns a single store and
/// serializes mutations itself.
pub trait UserStore {
    /// Returns the record for `id`, or [`GraphError::UserNotFound`].
    fn get(&self, id: UserId) -> Result<&User, GraphError>;

    /// Returns all records in insertion order.
    fn list(&self) -> Vec<&User>;

    /// Inserts a new record. Fails with [`GraphError::DuplicateId`] if the
    /// id is already present.
    fn insert(&mut self, record: User) -> Result<(), GraphError>;

    /// Applies an atomic in-place change to the record for `id` and returns
    /// the updated record. Fails with [`GraphError::UserNotFound`] if absent.
    fn update<F>(&mut self, id: UserId, mutate: F) -> Result<&User, GraphError>
    where
        F: FnOnce(&mut User);

    /// Removes and returns the record for `id`. Fails with
    /// [`GraphError::UserNotFound`] if absent.
    fn remove(&mut self, id: UserId) -> Result<User, GraphError>;

    /// Returns `true` if a record with `id` exists.
    fn contains(&self, id: UserId) -> bool;

    /// Finds a record by exact (case-sensitive) username.
    fn find_by_username(&self, username: &str) -> Option<&User>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory implementation of [`UserStore`].
///
/// Backed by an `IndexMap` so `list()` returns records in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: IndexMap<UserId, User>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore {
            users: IndexMap::new(),
        }
    }
}

impl UserStore for InMemoryStore {
    fn get(&self, id: UserId) -> Result<&User, GraphError> {
        self.users.get(&id).ok_or(GraphError::UserNotFound { id })
    }

    fn list(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    fn insert(&mut self, record: User) -> Result<(), GraphError> {
        let id = record.id;
        if self.users.contains_key(&id) {
            return Err(GraphError::DuplicateId { id });
        }
        self.users.insert(id, record);
        Ok(())
    }

    fn update<F>(&mut self, id: UserId, mutate: F) -> Result<&User, GraphError>
    where
        F: FnOnce(&mut User),
    {
        let record = self
            .users
            .get_mut(&id)
            .ok_or(GraphError::UserNotFound { id })?;
        mutate(record);
        Ok(record)
    }

    fn remove(&mut self, id: UserId) -> Result<User, GraphError> {
        // shift_remove keeps the remaining records in insertion order.
        self.users
            .shift_remove(&id)
            .ok_or(GraphError::UserNotFound { id })
    }

    fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
