//! Validator and auto-fix tests.

use aas::model::{ModelingKind, SubmodelElement};
use aas::validate::codes;
use aas::{Severity, auto_fix, validate};

use crate::helpers::fixtures::*;

#[test]
fn test_fixture_environments_are_clean() {
    assert!(validate(&plant_scenario().env).is_empty());
    assert!(validate(&collection_scenario().env).is_empty());
}

#[test]
fn test_empty_id_short_is_fixed_and_revalidates_clean() {
    let mut s = collection_scenario();
    let nested = s
        .env
        .add_element(s.coll1, SubmodelElement::property("", "int", "3"))
        .unwrap();

    let records = validate(&s.env);
    let blank: Vec<_> = records
        .iter()
        .filter(|r| r.code == codes::BLANK_ID_SHORT)
        .collect();
    assert_eq!(blank.len(), 1);
    assert_eq!(blank[0].severity, Severity::SpecViolation);
    assert_eq!(blank[0].source, nested);

    assert_eq!(auto_fix(&mut s.env, &records), 1);
    assert_eq!(s.env.get(nested).unwrap().id_short(), "PLACEHOLDER");
    assert!(
        validate(&s.env)
            .iter()
            .all(|r| r.code != codes::BLANK_ID_SHORT)
    );
}

#[test]
fn test_records_from_every_rule_are_fixable_in_one_batch() {
    let mut s = collection_scenario();
    s.env
        .add_element(
            s.coll1,
            SubmodelElement::capability(" ").with_kind(ModelingKind::from_raw("INSTANCE")),
        )
        .unwrap();
    s.env
        .add_element(
            s.coll1,
            SubmodelElement::capability("Bad").with_kind(ModelingKind::from_raw("Sometimes")),
        )
        .unwrap();

    let records = validate(&s.env);
    assert_eq!(records.len(), 3);
    assert_eq!(auto_fix(&mut s.env, &records), 3);
    assert!(validate(&s.env).is_empty());
}

#[test]
fn test_fix_skipped_for_nodes_detached_after_validation() {
    let mut s = collection_scenario();
    let doomed = s
        .env
        .add_element(s.coll1, SubmodelElement::property("", "int", "3"))
        .unwrap();
    let records = validate(&s.env);
    s.env.remove_child(s.submodel, s.coll1);

    assert_eq!(auto_fix(&mut s.env, &records), 0);
    assert_eq!(s.env.get(doomed).unwrap().id_short(), "");
}
