//! Submodel elements: the closed set of node kinds inside a Submodel.
//!
//! ```text
//! SubmodelElement
//! ├── referable / kind / semantic_id / qualifiers / data_specifications
//! └── value: ElementValue
//!     ├── Property, MultiLanguageProperty, Range, Blob, File, ReferenceElement   (data elements)
//!     ├── RelationshipElement, AnnotatedRelationshipElement*
//!     ├── Capability, BasicEvent
//!     └── SubmodelElementCollection*, Operation*, Entity*
//!                                             (* owns children)
//! ```

use smol_str::SmolStr;

use super::container::{ChildCollection, NodeId, Placement, insert_into, remove_from};
use super::key::KeyKind;
use super::qualifier::Qualifier;
use super::reference::{Reference, SemanticId};
use super::referable::{ModelingKind, Referable};
use crate::base::LangStringSet;

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The variant of a submodel element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Property,
    MultiLanguageProperty,
    Range,
    File,
    Blob,
    ReferenceElement,
    RelationshipElement,
    AnnotatedRelationshipElement,
    Capability,
    SubmodelElementCollection,
    Operation,
    Entity,
    BasicEvent,
}

impl ElementKind {
    /// Every element kind, in declaration order.
    pub const ALL: [ElementKind; 13] = [
        Self::Property,
        Self::MultiLanguageProperty,
        Self::Range,
        Self::File,
        Self::Blob,
        Self::ReferenceElement,
        Self::RelationshipElement,
        Self::AnnotatedRelationshipElement,
        Self::Capability,
        Self::SubmodelElementCollection,
        Self::Operation,
        Self::Entity,
        Self::BasicEvent,
    ];

    /// Stable tag name used to discriminate polymorphic encodings.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Property => "Property",
            Self::MultiLanguageProperty => "MultiLanguageProperty",
            Self::Range => "Range",
            Self::File => "File",
            Self::Blob => "Blob",
            Self::ReferenceElement => "ReferenceElement",
            Self::RelationshipElement => "RelationshipElement",
            Self::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            Self::Capability => "Capability",
            Self::SubmodelElementCollection => "SubmodelElementCollection",
            Self::Operation => "Operation",
            Self::Entity => "Entity",
            Self::BasicEvent => "BasicEvent",
        }
    }

    /// Parse a tag name. Exact match only.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }

    /// Returns true for the data element kinds (the only kinds allowed as
    /// annotations of an AnnotatedRelationshipElement).
    pub fn is_data_element(&self) -> bool {
        matches!(
            self,
            Self::Property
                | Self::MultiLanguageProperty
                | Self::Range
                | Self::File
                | Self::Blob
                | Self::ReferenceElement
        )
    }

    /// Returns true if elements of this kind own child elements.
    pub fn owns_children(&self) -> bool {
        matches!(
            self,
            Self::AnnotatedRelationshipElement
                | Self::SubmodelElementCollection
                | Self::Operation
                | Self::Entity
        )
    }

    /// The Key kind used to address elements of this kind.
    pub fn key_kind(&self) -> KeyKind {
        KeyKind::parse(self.tag())
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// PAYLOADS
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Property {
    pub value_type: SmolStr,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
}

impl Property {
    pub fn new(value_type: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            value_type: value_type.into(),
            value: Some(value.into()),
            value_id: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiLanguageProperty {
    pub value: LangStringSet,
    pub value_id: Option<Reference>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    pub value_type: SmolStr,
    pub min: Option<String>,
    pub max: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blob {
    pub mime_type: SmolStr,
    pub value: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    pub mime_type: SmolStr,
    /// Path or URI of the file.
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceElement {
    pub value: Option<Reference>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationshipElement {
    pub first: Reference,
    pub second: Reference,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotatedRelationshipElement {
    pub first: Reference,
    pub second: Reference,
    /// Data elements annotating the relationship.
    pub annotations: Vec<NodeId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmodelElementCollection {
    pub value: Vec<NodeId>,
    pub ordered: bool,
    pub allow_duplicates: bool,
}

/// An operation's three variable lists; each entry wraps one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operation {
    pub input_variables: Vec<NodeId>,
    pub output_variables: Vec<NodeId>,
    pub inoutput_variables: Vec<NodeId>,
}

impl Operation {
    fn list_mut(&mut self, placement: Placement) -> Option<&mut Vec<NodeId>> {
        match placement {
            Placement::Input => Some(&mut self.input_variables),
            Placement::Output => Some(&mut self.output_variables),
            Placement::InOutput => Some(&mut self.inoutput_variables),
            Placement::Default => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityType {
    #[default]
    CoManagedEntity,
    SelfManagedEntity,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoManagedEntity => "CoManagedEntity",
            Self::SelfManagedEntity => "SelfManagedEntity",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entity {
    pub statements: Vec<NodeId>,
    pub entity_type: EntityType,
    pub asset_ref: Option<Reference>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasicEvent {
    pub observed: Reference,
}

// ============================================================================
// CHILD COLLECTION IMPLS
// ============================================================================

impl ChildCollection for SubmodelElementCollection {
    fn children(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.value.iter().copied())
    }

    fn insert_child(&mut self, child: NodeId, _placement: Placement, index: Option<usize>) {
        insert_into(&mut self.value, child, index);
    }

    fn remove_child(&mut self, child: NodeId) -> bool {
        remove_from(&mut self.value, child)
    }
}

impl ChildCollection for AnnotatedRelationshipElement {
    fn children(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.annotations.iter().copied())
    }

    fn accepts(&self, kind: ElementKind, placement: Placement) -> bool {
        placement == Placement::Default && kind.is_data_element()
    }

    fn insert_child(&mut self, child: NodeId, _placement: Placement, index: Option<usize>) {
        insert_into(&mut self.annotations, child, index);
    }

    fn remove_child(&mut self, child: NodeId) -> bool {
        remove_from(&mut self.annotations, child)
    }
}

impl ChildCollection for Entity {
    fn children(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.statements.iter().copied())
    }

    fn insert_child(&mut self, child: NodeId, _placement: Placement, index: Option<usize>) {
        insert_into(&mut self.statements, child, index);
    }

    fn remove_child(&mut self, child: NodeId) -> bool {
        remove_from(&mut self.statements, child)
    }
}

impl ChildCollection for Operation {
    fn children(&self) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(
            self.input_variables
                .iter()
                .chain(&self.output_variables)
                .chain(&self.inoutput_variables)
                .copied(),
        )
    }

    fn placement_of(&self, child: NodeId) -> Option<Placement> {
        if self.input_variables.contains(&child) {
            Some(Placement::Input)
        } else if self.output_variables.contains(&child) {
            Some(Placement::Output)
        } else if self.inoutput_variables.contains(&child) {
            Some(Placement::InOutput)
        } else {
            None
        }
    }

    fn accepts(&self, _kind: ElementKind, placement: Placement) -> bool {
        placement != Placement::Default
    }

    fn insert_child(&mut self, child: NodeId, placement: Placement, index: Option<usize>) {
        if let Some(list) = self.list_mut(placement) {
            insert_into(list, child, index);
        }
    }

    fn remove_child(&mut self, child: NodeId) -> bool {
        remove_from(&mut self.input_variables, child)
            || remove_from(&mut self.output_variables, child)
            || remove_from(&mut self.inoutput_variables, child)
    }
}

// ============================================================================
// ELEMENT VALUE
// ============================================================================

/// Variant-specific payload of a submodel element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementValue {
    Property(Property),
    MultiLanguageProperty(MultiLanguageProperty),
    Range(Range),
    File(File),
    Blob(Blob),
    ReferenceElement(ReferenceElement),
    RelationshipElement(RelationshipElement),
    AnnotatedRelationshipElement(AnnotatedRelationshipElement),
    Capability,
    SubmodelElementCollection(SubmodelElementCollection),
    Operation(Operation),
    Entity(Entity),
    BasicEvent(BasicEvent),
}

impl ElementValue {
    /// An empty payload of the given kind.
    pub fn empty(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Property => Self::Property(Property::default()),
            ElementKind::MultiLanguageProperty => {
                Self::MultiLanguageProperty(MultiLanguageProperty::default())
            }
            ElementKind::Range => Self::Range(Range::default()),
            ElementKind::File => Self::File(File::default()),
            ElementKind::Blob => Self::Blob(Blob::default()),
            ElementKind::ReferenceElement => Self::ReferenceElement(ReferenceElement::default()),
            ElementKind::RelationshipElement => {
                Self::RelationshipElement(RelationshipElement::default())
            }
            ElementKind::AnnotatedRelationshipElement => {
                Self::AnnotatedRelationshipElement(AnnotatedRelationshipElement::default())
            }
            ElementKind::Capability => Self::Capability,
            ElementKind::SubmodelElementCollection => {
                Self::SubmodelElementCollection(SubmodelElementCollection::default())
            }
            ElementKind::Operation => Self::Operation(Operation::default()),
            ElementKind::Entity => Self::Entity(Entity::default()),
            ElementKind::BasicEvent => Self::BasicEvent(BasicEvent::default()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Property(_) => ElementKind::Property,
            Self::MultiLanguageProperty(_) => ElementKind::MultiLanguageProperty,
            Self::Range(_) => ElementKind::Range,
            Self::File(_) => ElementKind::File,
            Self::Blob(_) => ElementKind::Blob,
            Self::ReferenceElement(_) => ElementKind::ReferenceElement,
            Self::RelationshipElement(_) => ElementKind::RelationshipElement,
            Self::AnnotatedRelationshipElement(_) => ElementKind::AnnotatedRelationshipElement,
            Self::Capability => ElementKind::Capability,
            Self::SubmodelElementCollection(_) => ElementKind::SubmodelElementCollection,
            Self::Operation(_) => ElementKind::Operation,
            Self::Entity(_) => ElementKind::Entity,
            Self::BasicEvent(_) => ElementKind::BasicEvent,
        }
    }

    /// The child-collection view of this payload, if it owns children.
    pub fn as_container(&self) -> Option<&dyn ChildCollection> {
        match self {
            Self::AnnotatedRelationshipElement(v) => Some(v),
            Self::SubmodelElementCollection(v) => Some(v),
            Self::Operation(v) => Some(v),
            Self::Entity(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut dyn ChildCollection> {
        match self {
            Self::AnnotatedRelationshipElement(v) => Some(v),
            Self::SubmodelElementCollection(v) => Some(v),
            Self::Operation(v) => Some(v),
            Self::Entity(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from_payload {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for ElementValue {
                fn from(v: $ty) -> Self {
                    Self::$ty(v)
                }
            }
        )*
    };
}

impl_from_payload!(
    Property,
    MultiLanguageProperty,
    Range,
    File,
    Blob,
    ReferenceElement,
    RelationshipElement,
    AnnotatedRelationshipElement,
    SubmodelElementCollection,
    Operation,
    Entity,
    BasicEvent,
);

// ============================================================================
// SUBMODEL ELEMENT
// ============================================================================

/// A typed node inside a Submodel.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmodelElement {
    pub referable: Referable,
    pub kind: ModelingKind,
    pub semantic_id: Option<SemanticId>,
    pub qualifiers: Vec<Qualifier>,
    pub data_specifications: Vec<Reference>,
    pub value: ElementValue,
}

impl SubmodelElement {
    /// Create a bare element with the given idShort and payload.
    pub fn new(id_short: impl Into<SmolStr>, value: impl Into<ElementValue>) -> Self {
        Self {
            referable: Referable::new(id_short),
            kind: ModelingKind::default(),
            semantic_id: None,
            qualifiers: Vec::new(),
            data_specifications: Vec::new(),
            value: value.into(),
        }
    }

    /// A Property with a value.
    pub fn property(
        id_short: impl Into<SmolStr>,
        value_type: impl Into<SmolStr>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(id_short, Property::new(value_type, value))
    }

    /// An empty SubmodelElementCollection.
    pub fn collection(id_short: impl Into<SmolStr>) -> Self {
        Self::new(id_short, SubmodelElementCollection::default())
    }

    /// A Capability marker.
    pub fn capability(id_short: impl Into<SmolStr>) -> Self {
        Self::new(id_short, ElementValue::Capability)
    }

    pub fn with_semantic_id(mut self, semantic_id: SemanticId) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }

    pub fn with_kind(mut self, kind: ModelingKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_category(mut self, category: impl Into<SmolStr>) -> Self {
        self.referable.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: LangStringSet) -> Self {
        self.referable.description = Some(description);
        self
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    pub fn element_kind(&self) -> ElementKind {
        self.value.kind()
    }

    pub fn id_short(&self) -> &str {
        &self.referable.id_short
    }
}
