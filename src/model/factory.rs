//! Tag dispatch for wire adapters.
//!
//! An encoder writes [`variant_tag`] next to each node; a decoder calls
//! [`create_by_tag`] to get an empty node of the right variant and then
//! fills in its fields. No wire format lives in this crate.

use super::concept::ConceptDescription;
use super::element::{ElementKind, ElementValue, SubmodelElement};
use super::node::Node;
use super::shell::AdministrationShell;
use super::submodel::Submodel;
use crate::base::constants::key_kinds;

/// Stable per-kind tag name of a node.
pub fn variant_tag(node: &Node) -> &'static str {
    match node {
        Node::Shell(_) => key_kinds::ASSET_ADMINISTRATION_SHELL,
        Node::Submodel(_) => key_kinds::SUBMODEL,
        Node::ConceptDescription(_) => key_kinds::CONCEPT_DESCRIPTION,
        Node::Element(e) => e.element_kind().tag(),
    }
}

/// An empty node of the variant named by `tag`, or `None` for an
/// unknown tag.
pub fn create_by_tag(tag: &str) -> Option<Node> {
    match tag {
        key_kinds::ASSET_ADMINISTRATION_SHELL => Some(AdministrationShell::default().into()),
        key_kinds::SUBMODEL => Some(Submodel::default().into()),
        key_kinds::CONCEPT_DESCRIPTION => Some(ConceptDescription::default().into()),
        _ => {
            let kind = ElementKind::from_tag(tag)?;
            Some(SubmodelElement::new("", ElementValue::empty(kind)).into())
        }
    }
}

/// Every tag [`create_by_tag`] understands.
pub fn known_tags() -> impl Iterator<Item = &'static str> {
    [
        key_kinds::ASSET_ADMINISTRATION_SHELL,
        key_kinds::SUBMODEL,
        key_kinds::CONCEPT_DESCRIPTION,
    ]
    .into_iter()
    .chain(ElementKind::ALL.into_iter().map(|k| k.tag()))
}
