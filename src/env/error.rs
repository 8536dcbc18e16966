//! Error types for environment mutations.

use thiserror::Error;

use crate::model::NodeId;

/// Errors that can occur while mutating an [`Environment`](super::Environment).
///
/// Every mutation that fails leaves the environment untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An Identifiable with this id already exists in its root collection.
    #[error("Duplicate {kind}: {id}")]
    Duplicate { kind: &'static str, id: String },

    /// The handle does not belong to this environment.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The target node does not own children.
    #[error("{tag} does not own children")]
    NotAContainer { tag: &'static str },

    /// The container does not accept this child at the requested placement.
    #[error("{parent} does not accept {child} at this placement")]
    Rejected {
        parent: &'static str,
        child: &'static str,
    },

    /// A node handed to Add/Insert already lists child handles.
    #[error("{0} already has children; build trees top-down")]
    Prepopulated(&'static str),

    /// Lookup target does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Every `NodeId` handle is taken.
    #[error("Environment is full: no node handle left")]
    ArenaFull,
}

impl ModelError {
    /// Create a duplicate-id error.
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            id: id.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
