//! Key and Reference matching tests.

use aas::model::{Key, KeyKind, MatchMode, Reference, SemanticId};
use aas::Identifier;
use rstest::rstest;

// =============================================================================
// MONOTONIC RELAXATION
// =============================================================================

const MODES: [MatchMode; 3] = [
    MatchMode::Strict,
    MatchMode::Relaxed,
    MatchMode::Identification,
];

#[rstest]
#[case(Key::new(KeyKind::Property, "a"), Key::new(KeyKind::Property, "a"), [true, true, true])]
#[case(Key::new(KeyKind::Property, "a"), Key::global("a"), [false, true, true])]
#[case(Key::global("a"), Key::new(KeyKind::Submodel, "a"), [false, true, true])]
#[case(Key::new(KeyKind::Property, "a"), Key::new(KeyKind::File, "a"), [false, false, true])]
#[case(Key::new(KeyKind::Property, "a"), Key::new(KeyKind::Property, "b"), [false, false, false])]
#[case(Key::new("Gizmo", "a"), Key::new("Gizmo", "a"), [true, true, true])]
#[case(Key::new("Gizmo", "a"), Key::new(KeyKind::Property, "a"), [false, false, true])]
fn test_match_mode_truth_table(#[case] a: Key, #[case] b: Key, #[case] expected: [bool; 3]) {
    for (mode, want) in MODES.iter().zip(expected) {
        assert_eq!(a.matches(&b, *mode), want, "{a} vs {b} under {mode:?}");
        assert_eq!(b.matches(&a, *mode), want, "{b} vs {a} under {mode:?}");
    }
}

#[test]
fn test_relaxation_is_monotonic_over_all_kind_pairs() {
    let kinds = [
        KeyKind::Property,
        KeyKind::GlobalReference,
        KeyKind::Submodel,
        KeyKind::SubmodelRef,
        KeyKind::Unknown("Gizmo".into()),
    ];
    for ka in &kinds {
        for kb in &kinds {
            for (va, vb) in [("x", "x"), ("x", "y")] {
                let a = Key::new(ka.clone(), va);
                let b = Key::new(kb.clone(), vb);
                if a.matches(&b, MatchMode::Strict) {
                    assert!(a.matches(&b, MatchMode::Relaxed), "{a} {b}");
                }
                if a.matches(&b, MatchMode::Relaxed) {
                    assert!(a.matches(&b, MatchMode::Identification), "{a} {b}");
                }
            }
        }
    }
}

// =============================================================================
// REFERENCES
// =============================================================================

#[test]
fn test_reference_display() {
    let r = Reference::model([
        Key::new(KeyKind::Submodel, "urn:sm:1"),
        Key::new(KeyKind::Property, "Temperature"),
    ]);
    assert_eq!(r.to_string(), "(Submodel)urn:sm:1,(Property)Temperature");
}

#[test]
fn test_semantic_id_refers_to_concept() {
    let sid = SemanticId::global("urn:cd:1");
    assert!(sid.refers_to(&Identifier::new("urn:cd:1")));
    assert!(!sid.refers_to(&Identifier::new("urn:cd:2")));
    assert!(sid.same_concept(&SemanticId::global("urn:cd:1")));
}

#[rstest]
#[case("Submodel", KeyKind::Submodel)]
#[case("SubmodelRef", KeyKind::SubmodelRef)]
#[case("GlobalReference", KeyKind::GlobalReference)]
#[case("submodel", KeyKind::Unknown("submodel".into()))]
fn test_key_kind_parse_is_exact(#[case] name: &str, #[case] expected: KeyKind) {
    let kind = KeyKind::parse(name);
    assert_eq!(kind, expected);
    assert_eq!(kind.as_str(), name);
}
