//! Editing tests: insertion, removal and Identifiable renames.

use aas::base::Change;
use aas::model::{
    AnnotatedRelationshipElement, ConceptDescription, Entity, Operation, SemanticId, Submodel,
    SubmodelElement,
};
use aas::{Environment, Identifier, ModelError, Placement};

use crate::helpers::fixtures::*;
use crate::helpers::node_assertions::*;

// =============================================================================
// INSERTION
// =============================================================================

#[test]
fn test_insert_sets_parent_and_keeps_order() {
    let mut s = collection_scenario();
    let p0 = s
        .env
        .insert_child(s.coll1, 0, SubmodelElement::property("P0", "int", "0"), Placement::Default)
        .unwrap();
    let p2 = s
        .env
        .insert_child(s.coll1, 99, SubmodelElement::property("P2", "int", "2"), Placement::Default)
        .unwrap();
    assert_eq!(s.env.children(s.coll1), vec![p0, s.p1, p2]);
    assert_eq!(s.env.get(p0).unwrap().parent(), Some(s.coll1));
}

#[test]
fn test_every_container_kind_accepts_children() {
    let mut env = Environment::new();
    let sm = env.add_submodel(Submodel::new("urn:sm:c", "C")).unwrap();
    let entity = env
        .add_element(sm, SubmodelElement::new("E", Entity::default()))
        .unwrap();
    let are = env
        .add_element(sm, SubmodelElement::new("R", AnnotatedRelationshipElement::default()))
        .unwrap();
    let op = env
        .add_element(sm, SubmodelElement::new("Op", Operation::default()))
        .unwrap();

    let statement = env
        .add_element(entity, SubmodelElement::collection("S"))
        .unwrap();
    let annotation = env
        .add_element(are, SubmodelElement::property("A", "string", "x"))
        .unwrap();
    let inout = env
        .add_child(op, SubmodelElement::property("IO", "int", "0"), Placement::InOutput)
        .unwrap();

    assert_resolves(&env, &submodel_path("urn:sm:c", &["E", "S"]), statement);
    assert_resolves(&env, &submodel_path("urn:sm:c", &["R", "A"]), annotation);
    assert_resolves(&env, &submodel_path("urn:sm:c", &["Op", "IO"]), inout);
}

#[test]
fn test_rejected_insertions_do_not_allocate() {
    let mut s = collection_scenario();
    let before = s.env.node_count();

    let err = s
        .env
        .add_element(s.p1, SubmodelElement::property("X", "int", "1"))
        .unwrap_err();
    assert!(matches!(err, ModelError::NotAContainer { .. }));

    let op = s
        .env
        .add_element(s.submodel, SubmodelElement::new("Op", Operation::default()))
        .unwrap();
    let err = s
        .env
        .add_element(op, SubmodelElement::property("X", "int", "1"))
        .unwrap_err();
    assert!(matches!(err, ModelError::Rejected { .. }));
    assert_eq!(s.env.node_count(), before + 1);
}

// =============================================================================
// REMOVAL
// =============================================================================

#[test]
fn test_remove_detaches_but_keeps_parent_link() {
    let mut s = collection_scenario();
    assert!(s.env.remove_child(s.coll1, s.p1));
    assert!(s.env.children(s.coll1).is_empty());
    assert_eq!(s.env.get(s.p1).unwrap().parent(), Some(s.coll1));
    assert_eq!(
        s.env.get(s.p1).unwrap().referable().diary.last_change(),
        Some(Change::Removed)
    );
    assert_not_found(&s.env, &submodel_path("SM1", &["Coll1", "P1"]));
    assert!(!s.env.remove_child(s.coll1, s.p1));
}

// =============================================================================
// RENAMES
// =============================================================================

#[test]
fn test_rename_concept_description_rewrites_semantic_ids() {
    let mut plant = plant_scenario();
    let other = plant
        .env
        .add_element(
            plant.submodel,
            SubmodelElement::property("Other", "double", "1")
                .with_semantic_id(SemanticId::global("urn:cd:other")),
        )
        .unwrap();

    let rewritten = plant
        .env
        .rename_concept_description(&Identifier::new(CD_ID), "urn:cd:temp-v2")
        .unwrap();
    assert_eq!(rewritten, 1);

    let new_id = Identifier::new("urn:cd:temp-v2");
    assert_eq!(plant.env.find_concept_description(&new_id), Some(plant.concept));
    let sid = plant.env.element(plant.temperature).unwrap().semantic_id.clone().unwrap();
    assert!(sid.refers_to(&new_id));
    assert_eq!(
        plant.env.find_concept_description_by_semantic_id(&sid),
        Some(plant.concept)
    );
    let untouched = plant.env.element(other).unwrap().semantic_id.clone().unwrap();
    assert!(untouched.refers_to(&Identifier::new("urn:cd:other")));
}

#[test]
fn test_rename_concept_description_to_taken_id_fails_without_mutation() {
    let mut plant = plant_scenario();
    plant
        .env
        .add_concept_description(ConceptDescription::new("urn:cd:taken", "Taken"))
        .unwrap();
    let before = plant.env.clone();

    let err = plant
        .env
        .rename_concept_description(&Identifier::new(CD_ID), "urn:cd:taken")
        .unwrap_err();
    assert!(matches!(err, ModelError::Duplicate { .. }));
    assert_eq!(
        plant.env.element(plant.temperature),
        before.element(plant.temperature)
    );
    assert_eq!(plant.env.get(plant.concept), before.get(plant.concept));
}

#[test]
fn test_rename_submodel_follows_shell_refs() {
    let mut plant = plant_scenario();
    let rewritten = plant
        .env
        .rename_submodel(&Identifier::new(SM_ID), "urn:sm:renamed")
        .unwrap();
    assert_eq!(rewritten, 1);
    assert_eq!(plant.env.submodels_of_shell(plant.shell), vec![plant.submodel]);
    assert_resolves(
        &plant.env,
        &submodel_path("urn:sm:renamed", &["Temperature"]),
        plant.temperature,
    );
}

#[test]
fn test_generated_identifiers_do_not_collide() {
    let mut env = Environment::new();
    for _ in 0..16 {
        env.add_submodel(Submodel::new(Identifier::generate(), "Generated"))
            .unwrap();
    }
    assert_eq!(env.submodels().count(), 16);
}
