//! Network layer: record types and the REST resource client.

pub mod api;
pub mod types;
