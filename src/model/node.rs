//! Arena entries: every node stored in an environment is a [`Node`].

use super::concept::ConceptDescription;
use super::container::{ChildCollection, NodeId};
use super::element::SubmodelElement;
use super::key::KeyKind;
use super::reference::SemanticId;
use super::referable::{Identifiable, ModelingKind, Referable};
use super::shell::AdministrationShell;
use super::submodel::Submodel;

/// A node of the model graph.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Shell(AdministrationShell),
    Submodel(Submodel),
    ConceptDescription(ConceptDescription),
    Element(SubmodelElement),
}

impl Node {
    pub fn referable(&self) -> &Referable {
        match self {
            Self::Shell(s) => &s.identifiable.referable,
            Self::Submodel(s) => &s.identifiable.referable,
            Self::ConceptDescription(c) => &c.identifiable.referable,
            Self::Element(e) => &e.referable,
        }
    }

    pub fn referable_mut(&mut self) -> &mut Referable {
        match self {
            Self::Shell(s) => &mut s.identifiable.referable,
            Self::Submodel(s) => &mut s.identifiable.referable,
            Self::ConceptDescription(c) => &mut c.identifiable.referable,
            Self::Element(e) => &mut e.referable,
        }
    }

    /// The Identifiable part, for the three root kinds.
    pub fn identifiable(&self) -> Option<&Identifiable> {
        match self {
            Self::Shell(s) => Some(&s.identifiable),
            Self::Submodel(s) => Some(&s.identifiable),
            Self::ConceptDescription(c) => Some(&c.identifiable),
            Self::Element(_) => None,
        }
    }

    pub fn identifiable_mut(&mut self) -> Option<&mut Identifiable> {
        match self {
            Self::Shell(s) => Some(&mut s.identifiable),
            Self::Submodel(s) => Some(&mut s.identifiable),
            Self::ConceptDescription(c) => Some(&mut c.identifiable),
            Self::Element(_) => None,
        }
    }

    pub fn id_short(&self) -> &str {
        &self.referable().id_short
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.referable().parent
    }

    /// The Key kind addressing this node.
    pub fn key_kind(&self) -> KeyKind {
        match self {
            Self::Shell(_) => KeyKind::AssetAdministrationShell,
            Self::Submodel(_) => KeyKind::Submodel,
            Self::ConceptDescription(_) => KeyKind::ConceptDescription,
            Self::Element(e) => e.element_kind().key_kind(),
        }
    }

    /// The child-collection view of this node, if it owns children.
    pub fn as_container(&self) -> Option<&dyn ChildCollection> {
        match self {
            Self::Submodel(s) => Some(s),
            Self::Element(e) => e.value.as_container(),
            Self::Shell(_) | Self::ConceptDescription(_) => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn ChildCollection> {
        match self {
            Self::Submodel(s) => Some(s),
            Self::Element(e) => e.value.as_container_mut(),
            Self::Shell(_) | Self::ConceptDescription(_) => None,
        }
    }

    pub fn modeling_kind(&self) -> Option<&ModelingKind> {
        match self {
            Self::Submodel(s) => Some(&s.kind),
            Self::Element(e) => Some(&e.kind),
            _ => None,
        }
    }

    pub fn modeling_kind_mut(&mut self) -> Option<&mut ModelingKind> {
        match self {
            Self::Submodel(s) => Some(&mut s.kind),
            Self::Element(e) => Some(&mut e.kind),
            _ => None,
        }
    }

    pub fn semantic_id(&self) -> Option<&SemanticId> {
        match self {
            Self::Submodel(s) => s.semantic_id.as_ref(),
            Self::Element(e) => e.semantic_id.as_ref(),
            _ => None,
        }
    }

    pub fn semantic_id_mut(&mut self) -> Option<&mut SemanticId> {
        match self {
            Self::Submodel(s) => s.semantic_id.as_mut(),
            Self::Element(e) => e.semantic_id.as_mut(),
            _ => None,
        }
    }

    pub fn as_shell(&self) -> Option<&AdministrationShell> {
        match self {
            Self::Shell(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_submodel(&self) -> Option<&Submodel> {
        match self {
            Self::Submodel(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_concept_description(&self) -> Option<&ConceptDescription> {
        match self {
            Self::ConceptDescription(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&SubmodelElement> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut SubmodelElement> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AdministrationShell> for Node {
    fn from(v: AdministrationShell) -> Self {
        Self::Shell(v)
    }
}

impl From<Submodel> for Node {
    fn from(v: Submodel) -> Self {
        Self::Submodel(v)
    }
}

impl From<ConceptDescription> for Node {
    fn from(v: ConceptDescription) -> Self {
        Self::ConceptDescription(v)
    }
}

impl From<SubmodelElement> for Node {
    fn from(v: SubmodelElement) -> Self {
        Self::Element(v)
    }
}
