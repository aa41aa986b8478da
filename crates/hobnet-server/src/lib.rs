//! HTTP/JSON API server for the user relationship and hobby network.
//!
//! Exposes the relationship graph over REST: user CRUD, symmetric
//! link/unlink of friends, hobby tagging, and a node/edge snapshot for
//! rendering. This crate contains the server framework, API schema types,
//! error handling, and route definitions; domain rules live in
//! `hobnet-core`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
