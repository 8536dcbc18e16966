//! Variant tag factory and modeling kind tests.

use aas::model::{ModelingKind, Node, create_by_tag, factory::known_tags, variant_tag};
use aas::ElementKind;
use rstest::rstest;

use crate::helpers::node_assertions::assert_element_kind;

#[test]
fn test_every_known_tag_roundtrips() {
    for tag in known_tags() {
        let node = create_by_tag(tag).unwrap_or_else(|| panic!("no node for {tag}"));
        assert_eq!(variant_tag(&node), tag);
        assert_eq!(node.id_short(), "");
    }
}

#[rstest]
#[case("Property", ElementKind::Property)]
#[case("SubmodelElementCollection", ElementKind::SubmodelElementCollection)]
#[case("AnnotatedRelationshipElement", ElementKind::AnnotatedRelationshipElement)]
#[case("Operation", ElementKind::Operation)]
fn test_element_tags_create_elements(#[case] tag: &str, #[case] kind: ElementKind) {
    let mut env = aas::Environment::new();
    let sm = env
        .add_submodel(aas::model::Submodel::new("urn:sm:f", "F"))
        .unwrap();
    let Some(Node::Element(mut element)) = create_by_tag(tag) else {
        panic!("{tag} is not an element tag");
    };
    element.referable.id_short = "X".into();
    let id = env.add_element(sm, element).unwrap();
    assert_eq!(
        env.get(id).unwrap().as_container().is_some(),
        kind.owns_children()
    );
    assert_eq!(assert_element_kind(&env, id, kind), "X");
}

#[rstest]
#[case("AssetAdministrationShell")]
#[case("Submodel")]
#[case("ConceptDescription")]
fn test_root_tags(#[case] tag: &str) {
    let node = create_by_tag(tag).unwrap();
    assert!(node.identifiable().is_some());
}

#[rstest]
#[case("property")]
#[case("Gizmo")]
#[case("")]
fn test_unknown_tags(#[case] tag: &str) {
    assert!(create_by_tag(tag).is_none());
}

#[rstest]
#[case("Instance", Some("Instance"))]
#[case("Template", Some("Template"))]
#[case("template", Some("Template"))]
#[case(" INSTANCE ", Some("Instance"))]
#[case("Prototype", None)]
#[case("", None)]
fn test_modeling_kind_canonical(#[case] raw: &str, #[case] expected: Option<&str>) {
    assert_eq!(ModelingKind::from_raw(raw).canonical(), expected);
}
