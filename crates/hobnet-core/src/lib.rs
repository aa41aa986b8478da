pub mod id;
pub mod user;
pub mod error;
pub mod store;
pub mod score;
pub mod engine;
pub mod projection;

// Re-export commonly used types
pub use id::UserId;
pub use user::{NewUser, User, UserPatch};
pub use error::GraphError;
pub use store::{InMemoryStore, UserStore};
pub use score::{ScorePolicy, SharedHobbyScorer};
pub use engine::SocialGraph;
pub use projection::{GraphEdge, GraphNode, GraphSnapshot};
