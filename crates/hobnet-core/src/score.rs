//! Popularity scoring policies.
//!
//! The score is a pure function of current graph state, recomputed by the
//! engine inside every mutation that can change it, so a reader never
//! observes a stale value. The exact formula is a policy choice behind
//! [`ScorePolicy`]; [`SharedHobbyScorer`] is the default.

use crate::user::User;

/// Computes a user's popularity score from the user's own record and the
/// resolved records of their current friends.
///
/// Implementations must be deterministic and never return a negative value.
pub trait ScorePolicy: Send + Sync {
    fn score(&self, user: &User, friends: &[&User]) -> f64;
}

/// Default policy: one point per friend plus a weighted point per hobby
/// shared with a friend, rounded to two decimal places.
///
/// A user with no friends scores the 0.0 baseline regardless of hobbies.
#[derive(Debug, Clone)]
pub struct SharedHobbyScorer {
    /// Contribution of each shared hobby occurrence. The shipped weight is
    /// 0.5, so scores land on clean half-point steps.
    pub shared_hobby_weight: f64,
}

impl Default for SharedHobbyScorer {
    fn default() -> Self {
        SharedHobbyScorer {
            shared_hobby_weight: 0.5,
        }
    }
}

impl ScorePolicy for SharedHobbyScorer {
    fn score(&self, user: &User, friends: &[&User]) -> f64 {
        let shared: usize = friends
            .iter()
            .map(|friend| user.hobbies.intersection(&friend.hobbies).count())
            .sum();
        let raw = friends.len() as f64 + self.shared_hobby_weight * shared as f64;
        (raw * 100.0).round() / 100.0
    }
}
