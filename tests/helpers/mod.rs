//! Shared fixtures and assertions for integration tests.

pub mod fixtures;
pub mod node_assertions;
