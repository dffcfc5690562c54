//! Networking modules for the management GraphQL endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login mutation and the authenticated `self` query,
//! `types` defines the GraphQL wire schema, and `error` the failure modes.

pub mod api;
pub mod error;
pub mod types;
