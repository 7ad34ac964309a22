//! Network layer: wire types and the REST transport.

pub mod api;
pub mod types;
