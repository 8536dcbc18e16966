//! Walk and model reference tests.

use aas::model::SubmodelElement;

use crate::helpers::fixtures::*;
use crate::helpers::node_assertions::*;

#[test]
fn test_model_reference_of_resolves_back() {
    let s = collection_scenario();
    for node in [s.submodel, s.coll1, s.p1] {
        let reference = s.env.model_reference_of(node).unwrap();
        assert_resolves(&s.env, &reference, node);
    }
    assert_eq!(s.env.id_short_path(s.p1).as_deref(), Some("Coll1.P1"));
    assert_eq!(s.env.root_of(s.p1), Some(s.submodel));
}

#[test]
fn test_referables_order() {
    let plant = plant_scenario();
    let all: Vec<_> = plant.env.referables().collect();
    assert_eq!(
        all,
        vec![plant.shell, plant.submodel, plant.temperature, plant.concept]
    );
}

#[test]
fn test_advisory_uniqueness_helper() {
    let mut s = collection_scenario();
    assert!(!s.env.check_id_short_is_unique(s.coll1, "p1", None));
    let dup = s
        .env
        .add_element(s.coll1, SubmodelElement::property("P1", "int", "2"))
        .unwrap();
    assert_eq!(s.env.children(s.coll1), vec![s.p1, dup]);
    // first sibling wins
    assert_resolves(&s.env, &submodel_path("SM1", &["Coll1", "P1"]), s.p1);
}
