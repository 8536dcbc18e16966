//! Assertion helpers for environment nodes.

use aas::model::NodeId;
use aas::{ElementKind, Environment, Reference};

/// Assert a reference resolves exactly to `expected`.
pub fn assert_resolves(env: &Environment, reference: &Reference, expected: NodeId) {
    let found = env.resolve(reference, true);
    assert_eq!(
        found,
        Some(expected),
        "Expected '{}' to resolve to {}, got {:?}",
        reference,
        expected,
        found
    );
}

/// Assert exact resolution of a reference fails.
pub fn assert_not_found(env: &Environment, reference: &Reference) {
    let found = env.resolve(reference, true);
    assert!(
        found.is_none(),
        "Expected '{}' not to resolve, got {:?}",
        reference,
        found
    );
}

/// Assert a node is a submodel element of the given kind and return its idShort.
pub fn assert_element_kind(env: &Environment, id: NodeId, expected: ElementKind) -> String {
    let element = env
        .element(id)
        .unwrap_or_else(|| panic!("Expected {} to be a submodel element", id));
    assert_eq!(
        element.element_kind(),
        expected,
        "Expected '{}' to be {}",
        element.id_short(),
        expected
    );
    element.id_short().to_string()
}
