//! Content hash tests.

use aas::base::LangStringSet;
use aas::model::{ElementValue, ModelingKind, SemanticId, SubmodelElement};
use aas::{Environment, compute_hash};
use rstest::rstest;

use crate::helpers::fixtures::*;

fn coll(id_short: &str) -> SubmodelElement {
    SubmodelElement::collection(id_short)
        .with_category("PARAMETER")
        .with_semantic_id(SemanticId::global("urn:cd:coll"))
}

#[test]
fn test_hash_is_deterministic_across_environments() {
    let a = plant_scenario();
    let b = plant_scenario();
    for (x, y) in [
        (a.shell, b.shell),
        (a.submodel, b.submodel),
        (a.temperature, b.temperature),
        (a.concept, b.concept),
    ] {
        assert_eq!(a.env.compute_hash(x), b.env.compute_hash(y));
    }
}

#[test]
fn test_collections_with_different_children_hash_identically() {
    let mut s = collection_scenario();
    let twin = s.env.add_element(s.submodel, coll("Coll1")).unwrap();
    let original = s.env.add_element(s.submodel, coll("Coll1")).unwrap();
    s.env
        .add_element(original, SubmodelElement::property("Extra", "int", "1"))
        .unwrap();
    s.env
        .add_element(original, SubmodelElement::collection("Nested"))
        .unwrap();

    assert_eq!(s.env.compute_hash(twin), s.env.compute_hash(original));
}

#[test]
fn test_submodel_hash_ignores_elements() {
    let s = collection_scenario();
    let mut empty = Environment::new();
    let bare = empty
        .add_submodel(aas::model::Submodel::new("SM1", "SM1"))
        .unwrap();
    assert_eq!(s.env.compute_hash(s.submodel), empty.compute_hash(bare));
}

#[rstest]
#[case::id_short(coll("Other"))]
#[case::category(coll("Coll1").with_category("VARIABLE"))]
#[case::semantic_id(coll("Coll1").with_semantic_id(SemanticId::global("urn:cd:other")))]
#[case::description(coll("Coll1").with_description(LangStringSet::new().with("en", "d")))]
#[case::kind(coll("Coll1").with_kind(ModelingKind::template()))]
fn test_own_attribute_changes_hash(#[case] changed: SubmodelElement) {
    assert_ne!(compute_hash(&changed), compute_hash(&coll("Coll1")));
}

#[test]
fn test_property_value_changes_hash() {
    let a = SubmodelElement::property("T", "double", "42.5");
    let b = SubmodelElement::property("T", "double", "42.6");
    let c = SubmodelElement::property("T", "float", "42.5");
    assert_ne!(compute_hash(&a), compute_hash(&b));
    assert_ne!(compute_hash(&a), compute_hash(&c));
}

#[test]
fn test_empty_payloads_of_different_kinds_differ() {
    let tags: Vec<_> = aas::ElementKind::ALL
        .iter()
        .map(|k| compute_hash(&SubmodelElement::new("X", ElementValue::empty(*k))))
        .collect();
    for (i, a) in tags.iter().enumerate() {
        for b in &tags[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
