//! Reference resolution tests.

use aas::model::{Key, KeyKind};
use aas::Reference;

use crate::helpers::fixtures::*;
use crate::helpers::node_assertions::*;

// =============================================================================
// SUBMODEL ROOTS
// =============================================================================

#[test]
fn test_temperature_roundtrip() {
    let plant = plant_scenario();
    let reference = submodel_path(SM_ID, &["Temperature"]);
    assert_resolves(&plant.env, &reference, plant.temperature);
    let property = plant.env.element(plant.temperature).unwrap();
    let aas::model::ElementValue::Property(p) = &property.value else {
        panic!("Temperature is not a Property");
    };
    assert_eq!(p.value.as_deref(), Some("42.5"));
    assert_eq!(p.value_type, "double");
}

#[test]
fn test_collection_scenario() {
    let s = collection_scenario();
    assert_resolves(&s.env, &submodel_path("SM1", &["Coll1", "P1"]), s.p1);
    assert_resolves(&s.env, &submodel_path("SM1", &["Coll1"]), s.coll1);
    assert_not_found(&s.env, &submodel_path("SM1", &["Coll1", "Missing"]));
}

#[test]
fn test_partial_resolution_stops_at_deepest_match() {
    let s = collection_scenario();
    let missing = submodel_path("SM1", &["Coll1", "Missing"]);
    assert_eq!(s.env.resolve(&missing, false), Some(s.coll1));

    let res = s
        .env
        .find_referable_with_root(&missing.keys, false)
        .unwrap();
    assert!(res.partial);
    assert_eq!(res.root.submodel, Some(s.submodel));
}

#[test]
fn test_unresolved_second_key_under_submodel_root() {
    let s = collection_scenario();
    for kind in [KeyKind::Submodel, KeyKind::SubmodelRef] {
        let keys = [
            Key::new(kind.clone(), "SM1"),
            Key::new(KeyKind::SubmodelElement, "Nope"),
        ];
        assert_eq!(s.env.find_referable(&keys, true), None, "{kind}");
        assert_eq!(s.env.find_referable(&keys, false), Some(s.submodel), "{kind}");
    }
}

#[test]
fn test_id_short_matching_is_trimmed_and_case_insensitive() {
    let s = collection_scenario();
    assert_resolves(&s.env, &submodel_path("SM1", &[" coll1 ", "p1"]), s.p1);
}

#[test]
fn test_submodel_id_must_match_exactly() {
    let s = collection_scenario();
    assert_not_found(&s.env, &submodel_path("sm1", &["Coll1"]));
}

#[test]
fn test_empty_key_list_is_not_found() {
    let s = collection_scenario();
    assert_eq!(s.env.find_referable(&[], false), None);
    assert_eq!(s.env.resolve(&Reference::empty(), false), None);
}

#[test]
fn test_leaf_with_keys_left_is_dead_end() {
    let s = collection_scenario();
    let through_leaf = submodel_path("SM1", &["Coll1", "P1", "Deeper"]);
    assert_eq!(s.env.resolve(&through_leaf, true), None);
    assert_eq!(s.env.resolve(&through_leaf, false), None);
}

// =============================================================================
// SHELL AND ASSET ROOTS
// =============================================================================

#[test]
fn test_resolve_through_shell() {
    let plant = plant_scenario();
    let reference = Reference::model([
        Key::new(KeyKind::AssetAdministrationShell, SHELL_ID),
        Key::new(KeyKind::Submodel, SM_ID),
        Key::new(KeyKind::Property, "Temperature"),
    ]);
    assert_resolves(&plant.env, &reference, plant.temperature);

    let res = plant
        .env
        .find_referable_with_root(&reference.keys, true)
        .unwrap();
    assert_eq!(res.root.shell, Some(plant.shell));
    assert_eq!(res.root.submodel, Some(plant.submodel));
    assert_eq!(res.root.keys_consumed, 2);
}

#[test]
fn test_shell_partial_falls_back_to_shell() {
    let plant = plant_scenario();
    let keys = [
        Key::new(KeyKind::AssetAdministrationShell, SHELL_ID),
        Key::new(KeyKind::Submodel, "urn:sm:unknown"),
    ];
    assert_eq!(plant.env.find_referable(&keys, true), None);
    assert_eq!(plant.env.find_referable(&keys, false), Some(plant.shell));
}

#[test]
fn test_resolve_through_asset_information() {
    let plant = plant_scenario();
    let keys = [
        Key::new(KeyKind::AssetInformation, ASSET_ID),
        Key::new(KeyKind::SubmodelRef, SM_ID),
        Key::new(KeyKind::Property, "Temperature"),
    ];
    let res = plant.env.find_referable_with_root(&keys, true).unwrap();
    assert_eq!(res.node, plant.temperature);
    assert_eq!(res.root.asset_id.as_ref().map(|a| a.as_str()), Some(ASSET_ID));
}

#[test]
fn test_concept_description_root() {
    let plant = plant_scenario();
    let cd = [Key::new(KeyKind::ConceptDescription, CD_ID)];
    assert_eq!(plant.env.find_referable(&cd, true), Some(plant.concept));

    let too_long = [cd[0].clone(), Key::new(KeyKind::Property, "x")];
    assert_eq!(plant.env.find_referable(&too_long, false), None);
}

#[test]
fn test_non_root_first_key_is_not_found() {
    let plant = plant_scenario();
    let keys = [Key::new(KeyKind::Property, "Temperature")];
    assert_eq!(plant.env.find_referable(&keys, false), None);
}
