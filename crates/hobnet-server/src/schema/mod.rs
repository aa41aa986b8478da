//! API request/response schema types.
//!
//! Requests deserialize into plain DTOs here and are converted to core
//! inputs by the service; responses serialize core records through the
//! view types. The graph snapshot endpoint reuses the core projection
//! types directly, which already carry the external wire shape.

pub mod users;
