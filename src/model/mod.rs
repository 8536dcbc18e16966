//! The meta-model: keys and references, base attributes, element variants,
//! root Identifiables and the child-collection protocol.
//!
//! ## Design
//!
//! Nodes never own other nodes. Every node lives in an
//! [`Environment`](crate::env::Environment) arena and child lists hold
//! [`NodeId`] handles; the parent link is a handle too, so parent cycles
//! cannot be built by accident and back links never take part in hashing.
//!
//! ```text
//! Environment arena: Vec<Node>
//! ├── Node::Shell(AdministrationShell)        submodel_refs: Vec<Reference>
//! ├── Node::Submodel(Submodel)                submodel_elements: Vec<NodeId>
//! ├── Node::ConceptDescription(..)
//! └── Node::Element(SubmodelElement)          value: ElementValue (13 variants)
//! ```

mod concept;
pub mod container;
mod element;
pub mod factory;
mod key;
mod node;
mod qualifier;
mod referable;
mod reference;
mod shell;
mod submodel;

pub use concept::{
    ConceptDescription, DataSpecificationContent, DataSpecificationIec61360,
    EmbeddedDataSpecification,
};
pub use container::{ChildCollection, NodeId, Placement};
pub use element::{
    AnnotatedRelationshipElement, BasicEvent, Blob, ElementKind, ElementValue, Entity, EntityType,
    File, MultiLanguageProperty, Operation, Property, Range, ReferenceElement,
    RelationshipElement, SubmodelElement, SubmodelElementCollection,
};
pub use factory::{create_by_tag, variant_tag};
pub use key::{Key, KeyKind, MatchMode};
pub use node::Node;
pub use qualifier::Qualifier;
pub use referable::{AdministrativeInformation, Identifiable, ModelingKind, Referable};
pub use reference::{Reference, ReferenceKind, SemanticId};
pub use shell::{AdministrationShell, AssetInformation, AssetKind, ConceptDictionary};
pub use submodel::Submodel;
