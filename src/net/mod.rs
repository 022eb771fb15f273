//! Network layer: wire types, error normalization, and the HTTP client.

pub mod api;
pub mod error;
pub mod query;
pub mod types;
