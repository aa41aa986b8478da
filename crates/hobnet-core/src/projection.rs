//! Read-only node/edge view of the network for external consumption.
//!
//! [`GraphSnapshot`] is always computed fresh from current store state --
//! there is no independent cache that can drift. Nodes carry the summary
//! fields a renderer needs; each undirected friendship is emitted exactly
//! once, lower id first.

use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::user::User;

/// Per-user summary node. Drops `friends` and `created_at` from the full
/// record; adjacency is carried by [`GraphEdge`] entries instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: UserId,
    pub username: String,
    pub age: u32,
    pub hobbies: Vec<String>,
    pub popularity_score: f64,
}

/// One undirected friendship, canonicalized so `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: UserId,
    pub target: UserId,
}

/// The externally-consumed snapshot: all nodes plus each friendship once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphSnapshot {
    /// Builds a snapshot from the given records.
    ///
    /// The two adjacency lists of a friendship collapse into a single
    /// undirected edge via `UnGraphMap`, so no A->B/B->A duplicates survive.
    pub fn build<'a, I>(users: I) -> GraphSnapshot
    where
        I: IntoIterator<Item = &'a User>,
    {
        let users: Vec<&User> = users.into_iter().collect();

        let mut adjacency = UnGraphMap::<UserId, ()>::new();
        for user in &users {
            adjacency.add_node(user.id);
            for &friend in &user.friends {
                adjacency.add_edge(user.id, friend, ());
            }
        }

        let nodes = users
            .iter()
            .map(|user| GraphNode {
                id: user.id,
                username: user.username.clone(),
                age: user.age,
                hobbies: user.hobbies.iter().cloned().collect(),
                popularity_score: user.popularity_score,
            })
            .collect();

        let edges = adjacency
            .all_edges()
            .map(|(a, b, _)| GraphEdge {
                source: a.min(b),
                target: a.max(b),
            })
            .collect();

        GraphSnapshot { nodes, edges }
    }
}
