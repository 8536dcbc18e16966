//! The Environment: owner of every node and the three root collections.
//!
//! ```text
//! Environment
//! ├── nodes: Vec<Node>                 (arena, handles are NodeId)
//! ├── shells: Vec<NodeId>              (ordered root collection)
//! ├── submodels: Vec<NodeId>           (ordered root collection)
//! └── concept_descriptions: Vec<NodeId>(ordered root collection)
//! ```
//!
//! - [`editing`] - Add/Insert/Remove and Identifiable renames
//! - [`resolve`] - lookups and the reference resolver
//! - [`walk`]    - generic traversal over the child-collection protocol
//!
//! The environment assumes a single writer. Callers that need to share it
//! across threads wrap it in one lock, see [`SharedEnvironment`].

pub mod editing;
mod error;
pub mod resolve;
pub mod walk;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{
    AdministrationShell, ConceptDescription, Node, NodeId, Submodel, SubmodelElement,
};

pub use error::ModelError;
pub use resolve::{Resolution, RootInfo};
pub use walk::Descendants;

/// An environment behind a single reader/writer lock.
pub type SharedEnvironment = Arc<RwLock<Environment>>;

/// Aggregate owning shells, submodels and concept descriptions.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    nodes: Vec<Node>,
    shells: Vec<NodeId>,
    submodels: Vec<NodeId>,
    concept_descriptions: Vec<NodeId>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this environment in a shared lock.
    pub fn into_shared(self) -> SharedEnvironment {
        Arc::new(RwLock::new(self))
    }

    /// Get a node by handle.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by handle.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn element(&self, id: NodeId) -> Option<&SubmodelElement> {
        self.get(id)?.as_element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut SubmodelElement> {
        self.get_mut(id)?.as_element_mut()
    }

    /// Number of arena slots, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn shell_ids(&self) -> &[NodeId] {
        &self.shells
    }

    pub fn submodel_ids(&self) -> &[NodeId] {
        &self.submodels
    }

    pub fn concept_description_ids(&self) -> &[NodeId] {
        &self.concept_descriptions
    }

    /// Iterate over shells in collection order.
    pub fn shells(&self) -> impl Iterator<Item = (NodeId, &AdministrationShell)> {
        self.shells
            .iter()
            .filter_map(|id| Some((*id, self.get(*id)?.as_shell()?)))
    }

    /// Iterate over submodels in collection order.
    pub fn submodels(&self) -> impl Iterator<Item = (NodeId, &Submodel)> {
        self.submodels
            .iter()
            .filter_map(|id| Some((*id, self.get(*id)?.as_submodel()?)))
    }

    /// Iterate over concept descriptions in collection order.
    pub fn concept_descriptions(&self) -> impl Iterator<Item = (NodeId, &ConceptDescription)> {
        self.concept_descriptions
            .iter()
            .filter_map(|id| Some((*id, self.get(*id)?.as_concept_description()?)))
    }

    /// Children of a node in collection order; empty for leaves.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .and_then(Node::as_container)
            .map(|c| c.children().collect())
            .unwrap_or_default()
    }

    /// Store a node in the arena without attaching it anywhere.
    fn alloc(&mut self, node: Node) -> Result<NodeId, ModelError> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(ModelError::ArenaFull)?;
        self.nodes.push(node);
        Ok(id)
    }
}
