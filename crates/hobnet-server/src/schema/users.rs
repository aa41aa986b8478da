//! User management request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hobnet_core::{NewUser, User, UserId, UserPatch};

/// Request to create a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub age: u32,
    /// Optional; missing means no hobbies.
    #[serde(default)]
    pub hobbies: Vec<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            username: req.username,
            age: req.age,
            hobbies: req.hobbies,
        }
    }
}

/// Partial update request; only supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub age: Option<u32>,
    pub hobbies: Option<Vec<String>>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            username: req.username,
            age: req.age,
            hobbies: req.hobbies,
        }
    }
}

/// Request body for link/unlink: the other endpoint of the friendship.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRequest {
    pub friend_id: UserId,
}

/// Request to append a hobby tag.
#[derive(Debug, Clone, Deserialize)]
pub struct AddHobbyRequest {
    pub hobby: String,
}

/// Full user representation returned by all user endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub age: u32,
    pub hobbies: Vec<String>,
    pub friends: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub popularity_score: f64,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            username: user.username,
            age: user.age,
            hobbies: user.hobbies.into_iter().collect(),
            friends: user.friends.into_iter().collect(),
            created_at: user.created_at,
            popularity_score: user.popularity_score,
        }
    }
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView::from(user.clone())
    }
}
