//! Shallow content fingerprints.
//!
//! [`compute_hash`] covers a node's own scalar attributes only: parent
//! handles and child lists never reach the buffer, so two containers with
//! identical attributes hash identically whatever they contain. Every call
//! builds its own [`HashWriter`]; there is no shared hasher state.

mod impls;
mod writer;

pub use writer::{ContentHash, HashWriter, Hashable};

use crate::env::Environment;
use crate::model::NodeId;

/// SHA-256 over the canonical encoding of `value`, as uppercase hex.
pub fn compute_hash<T: Hashable + ?Sized>(value: &T) -> ContentHash {
    let mut w = HashWriter::new();
    value.hash_into(&mut w);
    w.finish()
}

impl Environment {
    /// Content hash of the node behind `id`.
    pub fn compute_hash(&self, id: NodeId) -> Option<ContentHash> {
        let node = self.get(id)?;
        let hash = compute_hash(node);
        tracing::trace!("[HASH] {} {} -> {}", id, node.id_short(), hash);
        Some(hash)
    }
}
