//! [`SocialGraph`]: the consistency engine tying the store and scorer
//! together.
//!
//! The engine is the single entry point for mutating friendship and hobby
//! state. All mutations go through `SocialGraph` methods to maintain the
//! graph invariants:
//!
//! 1. The friends relation is symmetric and irreflexive.
//! 2. Hobbies hold no duplicate entries (case-sensitive exact match).
//! 3. A user with friendships cannot be deleted; deletion never cascades.
//! 4. `popularity_score` is refreshed before any mutation returns, for
//!    every user whose inputs changed.
//!
//! Reads (`user`, `users`, `snapshot`) bypass the mutation paths and go
//! straight to the store/projection.

use crate::error::GraphError;
use crate::id::UserId;
use crate::projection::GraphSnapshot;
use crate::score::{ScorePolicy, SharedHobbyScorer};
use crate::store::{InMemoryStore, UserStore};
use crate::user::{hobby_set, NewUser, User, UserPatch};

/// Minimum accepted age, inclusive.
pub const MIN_AGE: u32 = 1;
/// Maximum accepted age, inclusive.
pub const MAX_AGE: u32 = 150;
/// Maximum accepted username length, in characters.
pub const MAX_USERNAME_LEN: usize = 50;

/// The relationship graph: users, symmetric friendships, hobby tags.
///
/// Owns the entity store and the scoring policy. A `link_users` or
/// `unlink_users` call applies its dual adjacency update entirely within one
/// `&mut self` borrow, so no reader can observe the relation updated on one
/// side only.
pub struct SocialGraph<S: UserStore = InMemoryStore> {
    store: S,
    scorer: Box<dyn ScorePolicy>,
}

impl SocialGraph<InMemoryStore> {
    /// Creates an empty graph backed by the in-memory store and the default
    /// scoring policy.
    pub fn new() -> Self {
        SocialGraph::with_store(InMemoryStore::new())
    }
}

impl Default for SocialGraph<InMemoryStore> {
    fn default() -> Self {
        SocialGraph::new()
    }
}

impl<S: UserStore> SocialGraph<S> {
    /// Creates a graph over an existing store with the default scoring
    /// policy.
    pub fn with_store(store: S) -> Self {
        SocialGraph {
            store,
            scorer: Box::new(SharedHobbyScorer::default()),
        }
    }

    /// Creates a graph with a custom scoring policy.
    pub fn with_scorer(store: S, scorer: Box<dyn ScorePolicy>) -> Self {
        SocialGraph { store, scorer }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Returns the record for `id`.
    pub fn user(&self, id: UserId) -> Result<&User, GraphError> {
        self.store.get(id)
    }

    /// Returns all records in insertion order.
    pub fn users(&self) -> Vec<&User> {
        self.store.list()
    }

    /// Builds a fresh node/edge snapshot from current store state.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::build(self.store.list())
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Creates a user with a fresh id and no friends.
    ///
    /// Validates age and username (including uniqueness) and de-duplicates
    /// hobbies before storing.
    pub fn create_user(&mut self, new: NewUser) -> Result<User, GraphError> {
        self.validate_username(&new.username, None)?;
        Self::validate_age(new.age)?;

        let user = User::new(new.username, new.age, hobby_set(new.hobbies));
        let id = user.id;
        self.store.insert(user)?;
        self.refresh_scores(&[id])?;
        Ok(self.store.get(id)?.clone())
    }

    /// Applies a partial update. A supplied `hobbies` list fully replaces
    /// the stored set after de-duplication.
    pub fn update_user(&mut self, id: UserId, patch: UserPatch) -> Result<User, GraphError> {
        self.store.get(id)?;
        if let Some(username) = &patch.username {
            self.validate_username(username, Some(id))?;
        }
        if let Some(age) = patch.age {
            Self::validate_age(age)?;
        }

        let hobbies_changed = patch.hobbies.is_some();
        self.store.update(id, |user| {
            if let Some(username) = patch.username {
                user.username = username;
            }
            if let Some(age) = patch.age {
                user.age = age;
            }
            if let Some(tags) = patch.hobbies {
                user.hobbies = hobby_set(tags);
            }
        })?;

        // A hobby change moves shared-hobby counts for every friend too.
        let mut affected = vec![id];
        if hobbies_changed {
            affected.extend(self.store.get(id)?.friends.iter().copied());
        }
        self.refresh_scores(&affected)?;
        Ok(self.store.get(id)?.clone())
    }

    /// Deletes a user. Refused while the user still has friendships.
    pub fn delete_user(&mut self, id: UserId) -> Result<(), GraphError> {
        let user = self.store.get(id)?;
        if !user.friends.is_empty() {
            return Err(GraphError::HasFriendships { id });
        }
        self.store.remove(id)?;
        Ok(())
    }

    /// Creates the symmetric friendship between `a` and `b` and returns the
    /// updated record for `a`.
    ///
    /// Already-linked pairs are an idempotent no-op success.
    pub fn link_users(&mut self, a: UserId, b: UserId) -> Result<User, GraphError> {
        if a == b {
            return Err(GraphError::SelfLink);
        }
        self.store.get(b)?;
        if self.store.get(a)?.is_friend(b) {
            return Ok(self.store.get(a)?.clone());
        }

        self.store.update(a, |user| {
            user.friends.insert(b);
        })?;
        self.store.update(b, |user| {
            user.friends.insert(a);
        })?;
        self.refresh_scores(&[a, b])?;
        Ok(self.store.get(a)?.clone())
    }

    /// Removes the friendship between `a` and `b` and returns the updated
    /// record for `a`.
    ///
    /// Pairs that are not currently linked are an idempotent no-op success.
    pub fn unlink_users(&mut self, a: UserId, b: UserId) -> Result<User, GraphError> {
        self.store.get(b)?;
        if !self.store.get(a)?.is_friend(b) {
            return Ok(self.store.get(a)?.clone());
        }

        self.store.update(a, |user| {
            user.friends.shift_remove(&b);
        })?;
        self.store.update(b, |user| {
            user.friends.shift_remove(&a);
        })?;
        self.refresh_scores(&[a, b])?;
        Ok(self.store.get(a)?.clone())
    }

    /// Appends a hobby tag and returns the updated record.
    ///
    /// An exact duplicate is an idempotent no-op success, not an error;
    /// callers that want to reject duplicates check membership first.
    pub fn add_hobby(&mut self, id: UserId, hobby: &str) -> Result<User, GraphError> {
        if hobby.is_empty() {
            return Err(GraphError::InvalidField {
                field: "hobby",
                reason: "must not be empty".to_string(),
            });
        }
        let user = self.store.get(id)?;
        if user.hobbies.contains(hobby) {
            return Ok(user.clone());
        }

        self.store.update(id, |user| {
            user.hobbies.insert(hobby.to_string());
        })?;

        let mut affected = vec![id];
        affected.extend(self.store.get(id)?.friends.iter().copied());
        self.refresh_scores(&affected)?;
        Ok(self.store.get(id)?.clone())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn validate_username(
        &self,
        username: &str,
        current: Option<UserId>,
    ) -> Result<(), GraphError> {
        if username.is_empty() {
            return Err(GraphError::InvalidField {
                field: "username",
                reason: "must not be empty".to_string(),
            });
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(GraphError::InvalidField {
                field: "username",
                reason: format!("must be at most {MAX_USERNAME_LEN} characters"),
            });
        }
        if let Some(existing) = self.store.find_by_username(username) {
            if current != Some(existing.id) {
                return Err(GraphError::UsernameTaken {
                    username: username.to_string(),
                });
            }
        }
        Ok(())
    }

    fn validate_age(age: u32) -> Result<(), GraphError> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(GraphError::InvalidField {
                field: "age",
                reason: format!("must be between {MIN_AGE} and {MAX_AGE}"),
            });
        }
        Ok(())
    }

    /// Recomputes and stores the score for each listed user. Scores are
    /// computed against current state first, then written back, so a policy
    /// reading several records never sees a half-applied refresh.
    fn refresh_scores(&mut self, ids: &[UserId]) -> Result<(), GraphError> {
        let mut updates = Vec::with_capacity(ids.len());
        for &id in ids {
            let user = self.store.get(id)?;
            let friends: Vec<&User> = user
                .friends
                .iter()
                .filter_map(|friend| self.store.get(*friend).ok())
                .collect();
            updates.push((id, self.scorer.score(user, &friends)));
        }
        for (id, score) in updates {
            self.store.update(id, |user| user.popularity_score = score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_user(name: &str, age: u32, hobbies: &[&str]) -> NewUser {
        NewUser {
            username: name.to_string(),
            age,
            hobbies: hobbies.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn graph_with(names: &[&str]) -> (SocialGraph, Vec<UserId>) {
        let mut graph = SocialGraph::new();
        let ids = names
            .iter()
            .map(|name| graph.create_user(new_user(name, 30, &[])).unwrap().id)
            .collect();
        (graph, ids)
    }

    // -- creation -----------------------------------------------------------

    #[test]
    fn created_user_starts_at_baseline() {
        let mut graph = SocialGraph::new();
        let user = graph
            .create_user(new_user("alice", 30, &["Chess"]))
            .unwrap();
        assert!(user.friends.is_empty());
        assert_eq!(user.popularity_score, 0.0);
        assert_eq!(graph.user(user.id).unwrap().username, "alice");
    }

    #[test]
    fn creation_deduplicates_hobbies() {
        let mut graph = SocialGraph::new();
        let user = graph
            .create_user(new_user("alice", 30, &["Chess", "Hiking", "Chess"]))
            .unwrap();
        let tags: Vec<&str> = user.hobbies.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["Chess", "Hiking"]);
    }

    #[test]
    fn creation_accepts_age_bounds() {
        let mut graph = SocialGraph::new();
        assert!(graph.create_user(new_user("young", MIN_AGE, &[])).is_ok());
        assert!(graph.create_user(new_user("old", MAX_AGE, &[])).is_ok());
    }

    #[test]
    fn creation_rejects_age_out_of_range() {
        let mut graph = SocialGraph::new();
        for age in [0, MAX_AGE + 1] {
            let err = graph.create_user(new_user("alice", age, &[])).unwrap_err();
            assert!(matches!(
                err,
                GraphError::InvalidField { field: "age", .. }
            ));
        }
        assert!(graph.users().is_empty());
    }

    #[test]
    fn creation_rejects_bad_usernames() {
        let mut graph = SocialGraph::new();
        let empty = graph.create_user(new_user("", 30, &[])).unwrap_err();
        assert!(matches!(
            empty,
            GraphError::InvalidField {
                field: "username",
                ..
            }
        ));

        let long = "x".repeat(MAX_USERNAME_LEN + 1);
        let too_long = graph.create_user(new_user(&long, 30, &[])).unwrap_err();
        assert!(matches!(
            too_long,
            GraphError::InvalidField {
                field: "username",
                ..
            }
        ));
    }

    #[test]
    fn creation_rejects_taken_username() {
        let mut graph = SocialGraph::new();
        graph.create_user(new_user("alice", 30, &[])).unwrap();
        let err = graph.create_user(new_user("alice", 25, &[])).unwrap_err();
        assert!(matches!(err, GraphError::UsernameTaken { .. }));
        assert_eq!(graph.users().len(), 1);
    }

    // -- update -------------------------------------------------------------

    #[test]
    fn update_applies_only_present_fields() {
        let (mut graph, ids) = graph_with(&["alice"]);
        graph.add_hobby(ids[0], "Chess").unwrap();

        let updated = graph
            .update_user(
                ids[0],
                UserPatch {
                    age: Some(31),
                    ..UserPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.age, 31);
        assert_eq!(updated.username, "alice");
        assert!(updated.hobbies.contains("Chess"));
    }

    #[test]
    fn update_replaces_hobbies_after_dedup() {
        let (mut graph, ids) = graph_with(&["alice"]);
        graph.add_hobby(ids[0], "Chess").unwrap();

        let updated = graph
            .update_user(
                ids[0],
                UserPatch {
                    hobbies: Some(vec![
                        "Go".to_string(),
                        "Hiking".to_string(),
                        "Go".to_string(),
                    ]),
                    ..UserPatch::default()
                },
            )
            .unwrap();
        let tags: Vec<&str> = updated.hobbies.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["Go", "Hiking"]);
    }

    #[test]
    fn rename_to_own_name_is_allowed() {
        let (mut graph, ids) = graph_with(&["alice"]);
        let updated = graph
            .update_user(
                ids[0],
                UserPatch {
                    username: Some("alice".to_string()),
                    ..UserPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.username, "alice");
    }

    #[test]
    fn rename_onto_taken_name_is_rejected() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        let err = graph
            .update_user(
                ids[1],
                UserPatch {
                    username: Some("alice".to_string()),
                    ..UserPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, GraphError::UsernameTaken { .. }));
        assert_eq!(graph.user(ids[1]).unwrap().username, "bob");
    }

    #[test]
    fn rejected_update_leaves_record_unchanged() {
        let (mut graph, ids) = graph_with(&["alice"]);
        let err = graph
            .update_user(
                ids[0],
                UserPatch {
                    age: Some(0),
                    hobbies: Some(vec!["Chess".to_string()]),
                    ..UserPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidField { .. }));

        let user = graph.user(ids[0]).unwrap();
        assert_eq!(user.age, 30);
        assert!(user.hobbies.is_empty());
    }

    #[test]
    fn update_unknown_user_is_not_found() {
        let mut graph = SocialGraph::new();
        let err = graph
            .update_user(UserId::new(), UserPatch::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::UserNotFound { .. }));
    }

    #[test]
    fn hobby_update_refreshes_friend_scores() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        graph.add_hobby(ids[0], "Chess").unwrap();
        graph.link_users(ids[0], ids[1]).unwrap();
        assert_eq!(graph.user(ids[1]).unwrap().popularity_score, 1.0);

        // Bob picks up Chess: one shared hobby on each side now.
        graph
            .update_user(
                ids[1],
                UserPatch {
                    hobbies: Some(vec!["Chess".to_string()]),
                    ..UserPatch::default()
                },
            )
            .unwrap();
        assert_eq!(graph.user(ids[0]).unwrap().popularity_score, 1.5);
        assert_eq!(graph.user(ids[1]).unwrap().popularity_score, 1.5);
    }

    // -- delete -------------------------------------------------------------

    #[test]
    fn delete_refused_while_friendships_exist() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        graph.link_users(ids[0], ids[1]).unwrap();

        let err = graph.delete_user(ids[0]).unwrap_err();
        assert!(matches!(err, GraphError::HasFriendships { .. }));
        assert!(graph.user(ids[0]).is_ok());

        graph.unlink_users(ids[0], ids[1]).unwrap();
        graph.delete_user(ids[0]).unwrap();
        assert!(matches!(
            graph.user(ids[0]).unwrap_err(),
            GraphError::UserNotFound { .. }
        ));
    }

    // -- link / unlink ------------------------------------------------------

    #[test]
    fn link_is_symmetric_and_scores_both_sides() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        let alice = graph.link_users(ids[0], ids[1]).unwrap();

        assert!(alice.is_friend(ids[1]));
        assert!(graph.user(ids[1]).unwrap().is_friend(ids[0]));
        assert_eq!(graph.user(ids[0]).unwrap().popularity_score, 1.0);
        assert_eq!(graph.user(ids[1]).unwrap().popularity_score, 1.0);
    }

    #[test]
    fn link_counts_shared_hobbies() {
        let mut graph = SocialGraph::new();
        let a = graph
            .create_user(new_user("alice", 30, &["Chess", "Hiking"]))
            .unwrap()
            .id;
        let b = graph
            .create_user(new_user("bob", 25, &["Chess"]))
            .unwrap()
            .id;
        graph.link_users(a, b).unwrap();

        assert_eq!(graph.user(a).unwrap().popularity_score, 1.5);
        assert_eq!(graph.user(b).unwrap().popularity_score, 1.5);
    }

    #[test]
    fn link_twice_is_idempotent() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        graph.link_users(ids[0], ids[1]).unwrap();
        let again = graph.link_users(ids[0], ids[1]).unwrap();

        assert_eq!(again.degree(), 1);
        assert_eq!(graph.user(ids[1]).unwrap().degree(), 1);
        assert_eq!(graph.user(ids[0]).unwrap().popularity_score, 1.0);
        assert_eq!(graph.snapshot().edges.len(), 1);
    }

    #[test]
    fn self_link_is_rejected() {
        let (mut graph, ids) = graph_with(&["alice"]);
        let err = graph.link_users(ids[0], ids[0]).unwrap_err();
        assert!(matches!(err, GraphError::SelfLink));
        assert!(graph.user(ids[0]).unwrap().friends.is_empty());
    }

    #[test]
    fn link_unknown_user_is_not_found() {
        let (mut graph, ids) = graph_with(&["alice"]);
        let err = graph.link_users(ids[0], UserId::new()).unwrap_err();
        assert!(matches!(err, GraphError::UserNotFound { .. }));
        let err = graph.link_users(UserId::new(), ids[0]).unwrap_err();
        assert!(matches!(err, GraphError::UserNotFound { .. }));
    }

    #[test]
    fn unlink_removes_both_sides_and_rescores() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        graph.link_users(ids[0], ids[1]).unwrap();
        graph.unlink_users(ids[0], ids[1]).unwrap();

        assert!(graph.user(ids[0]).unwrap().friends.is_empty());
        assert!(graph.user(ids[1]).unwrap().friends.is_empty());
        assert_eq!(graph.user(ids[0]).unwrap().popularity_score, 0.0);
        assert_eq!(graph.user(ids[1]).unwrap().popularity_score, 0.0);
    }

    #[test]
    fn unlink_never_linked_pair_is_a_noop_success() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        let alice = graph.unlink_users(ids[0], ids[1]).unwrap();
        assert!(alice.friends.is_empty());
    }

    // -- hobbies ------------------------------------------------------------

    #[test]
    fn add_hobby_twice_keeps_one_entry() {
        let (mut graph, ids) = graph_with(&["alice"]);
        graph.add_hobby(ids[0], "Chess").unwrap();
        let user = graph.add_hobby(ids[0], "Chess").unwrap();

        assert_eq!(user.hobbies.iter().filter(|h| *h == "Chess").count(), 1);
        assert_eq!(user.hobbies.len(), 1);
    }

    #[test]
    fn add_hobby_refreshes_friend_scores() {
        let (mut graph, ids) = graph_with(&["alice", "bob"]);
        graph.add_hobby(ids[0], "Chess").unwrap();
        graph.link_users(ids[0], ids[1]).unwrap();

        graph.add_hobby(ids[1], "Chess").unwrap();
        assert_eq!(graph.user(ids[0]).unwrap().popularity_score, 1.5);
        assert_eq!(graph.user(ids[1]).unwrap().popularity_score, 1.5);
    }

    #[test]
    fn add_empty_hobby_is_rejected() {
        let (mut graph, ids) = graph_with(&["alice"]);
        let err = graph.add_hobby(ids[0], "").unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidField { field: "hobby", .. }
        ));
    }

    #[test]
    fn add_hobby_unknown_user_is_not_found() {
        let mut graph = SocialGraph::new();
        let err = graph.add_hobby(UserId::new(), "Chess").unwrap_err();
        assert!(matches!(err, GraphError::UserNotFound { .. }));
    }

    // -- scoring policy seam ------------------------------------------------

    #[test]
    fn custom_policy_baseline_is_honored_at_creation() {
        struct Constant(f64);
        impl ScorePolicy for Constant {
            fn score(&self, _user: &User, _friends: &[&User]) -> f64 {
                self.0
            }
        }

        let mut graph = SocialGraph::with_scorer(InMemoryStore::new(), Box::new(Constant(5.0)));
        let user = graph.create_user(new_user("alice", 30, &[])).unwrap();
        assert_eq!(user.popularity_score, 5.0);
    }

    // -- whole-graph invariants ---------------------------------------------

    proptest! {
        /// Arbitrary link/unlink interleavings keep the relation symmetric,
        /// irreflexive, and every stored score fresh.
        #[test]
        fn random_sequences_preserve_invariants(
            ops in proptest::collection::vec(
                (0usize..5, 0usize..5, proptest::bool::ANY),
                1..40,
            ),
        ) {
            let (mut graph, ids) = graph_with(&["u0", "u1", "u2", "u3", "u4"]);
            for (a, b, link) in ops {
                let (a, b) = (ids[a], ids[b]);
                if link {
                    let _ = graph.link_users(a, b);
                } else {
                    let _ = graph.unlink_users(a, b);
                }
            }

            let scorer = SharedHobbyScorer::default();
            for user in graph.users() {
                prop_assert!(!user.friends.contains(&user.id));
                for friend in &user.friends {
                    prop_assert!(graph.user(*friend).unwrap().is_friend(user.id));
                }
                let friends: Vec<&User> = user
                    .friends
                    .iter()
                    .map(|f| graph.user(*f).unwrap())
                    .collect();
                prop_assert_eq!(user.popularity_score, scorer.score(user, &friends));
            }

            // Each distinct pair appears exactly once in the projection.
            let snapshot = graph.snapshot();
            let degree_total: usize = graph.users().iter().map(|u| u.degree()).sum();
            prop_assert_eq!(snapshot.edges.len() * 2, degree_total);
        }
    }
}
