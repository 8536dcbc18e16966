use smol_str::SmolStr;

use super::container::{ChildCollection, NodeId, Placement, insert_into, remove_from};
use super::qualifier::Qualifier;
use super::reference::{Reference, SemanticId};
use super::referable::{Identifiable, ModelingKind};
use crate::base::Identifier;

/// An Identifiable grouping of submodel elements describing one aspect
/// of an asset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submodel {
    pub identifiable: Identifiable,
    pub kind: ModelingKind,
    pub semantic_id: Option<SemanticId>,
    pub qualifiers: Vec<Qualifier>,
    pub data_specifications: Vec<Reference>,
    /// Root ordered collection of elements.
    pub submodel_elements: Vec<NodeId>,
}

impl Submodel {
    pub fn new(id: impl Into<Identifier>, id_short: impl Into<SmolStr>) -> Self {
        Self {
            identifiable: Identifiable::new(id, id_short),
            ..Self::default()
        }
    }

    pub fn with_semantic_id(mut self, semantic_id: SemanticId) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }

    pub fn with_kind(mut self, kind: ModelingKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.identifiable.id
    }
}

impl ChildCollection for Submodel {
    fn children(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.submodel_elements.iter().copied())
    }

    fn insert_child(&mut self, child: NodeId, _placement: Placement, index: Option<usize>) {
        insert_into(&mut self.submodel_elements, child, index);
    }

    fn remove_child(&mut self, child: NodeId) -> bool {
        remove_from(&mut self.submodel_elements, child)
    }
}
