use indoc::indoc;

use crate::{Automaton, CharSet, LoadError, NodeKind, ValidationError};

#[test]
fn parse_generator_array_layout() {
    let json = indoc! {r#"
        [
            {"type": "", "edges": {"[\"a\"]": 1}},
            {"type": "", "edges": {"[\"b\",\"c\"]": 2}},
            {"type": "accept", "edges": {}}
        ]
    "#};

    let automaton = Automaton::from_json(json).unwrap();
    assert_eq!(automaton.len(), 3);
    assert_eq!(automaton.accept(), 2);
    assert_eq!(automaton.edges(0)[0].label, CharSet::from("a"));
    assert_eq!(automaton.edges(1)[0].label, CharSet::from("bc"));
    assert_eq!(automaton.edges(1)[0].dest, 2);
    assert_eq!(automaton.nodes()[2].kind, NodeKind::Accept);
}

#[test]
fn parse_object_layout_sorted_by_id() {
    let json = indoc! {r#"
        {
            "1": {"type": "accept", "edges": {}},
            "0": {"type": "start", "edges": {"x": 1}}
        }
    "#};

    let automaton = Automaton::from_json(json).unwrap();
    assert_eq!(automaton.len(), 2);
    assert_eq!(automaton.accept(), 1);
    assert_eq!(automaton.edges(0)[0].label, CharSet::from("x"));
}

#[test]
fn preserves_edge_declaration_order() {
    let json = indoc! {r#"
        [
            {"type": "normal", "edges": {"[\"z\"]": 3, "[\"a\"]": 1, "[\"m\"]": 2}},
            {"type": "normal", "edges": {}},
            {"type": "normal", "edges": {}},
            {"type": "accept", "edges": {}}
        ]
    "#};

    let automaton = Automaton::from_json(json).unwrap();
    let dests: Vec<_> = automaton.edges(0).iter().map(|e| e.dest).collect();
    assert_eq!(dests, [3, 1, 2]);
}

#[test]
fn bare_bracket_is_a_character() {
    let json = r#"[{"type": "", "edges": {"[": 1}}, {"type": "accept", "edges": {}}]"#;

    let automaton = Automaton::from_json(json).unwrap();
    assert_eq!(automaton.edges(0)[0].label, CharSet::from("["));
}

#[test]
fn missing_edges_default_to_none() {
    let json = r#"[{"type": "", "edges": {"a": 1}}, {"type": "accept"}]"#;

    let automaton = Automaton::from_json(json).unwrap();
    assert!(automaton.edges(1).is_empty());
}

#[test]
fn rejects_multi_character_symbol() {
    let json = r#"[{"type": "", "edges": {"[\"ab\"]": 1}}, {"type": "accept", "edges": {}}]"#;

    let err = Automaton::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Validation(ValidationError::MalformedLabel { node: 0, .. })
    ));
}

#[test]
fn rejects_unknown_kind() {
    let json = r#"[{"type": "", "edges": {}}, {"type": "final", "edges": {}}]"#;

    let err = Automaton::from_json(json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid automaton: node 1 has unknown kind \"final\" (expected \"normal\" or \"accept\")"
    );
}

#[test]
fn rejects_non_numeric_node_id() {
    let json = r#"{"start": {"type": "", "edges": {}}}"#;

    let err = Automaton::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Validation(ValidationError::InvalidNodeId(ref key)) if key == "start"
    ));
}

#[test]
fn rejects_gap_in_object_ids() {
    let json = r#"{"0": {"type": "", "edges": {}}, "2": {"type": "accept", "edges": {}}}"#;

    let err = Automaton::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Validation(ValidationError::NonDenseIds {
            expected: 1,
            found: 2
        })
    ));
}

#[test]
fn rejects_two_accept_nodes() {
    let json = indoc! {r#"
        [
            {"type": "", "edges": {"a": 1, "b": 2}},
            {"type": "accept", "edges": {}},
            {"type": "accept", "edges": {}}
        ]
    "#};

    let err = Automaton::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Validation(ValidationError::MultipleAcceptNodes(ref ids)) if ids == &[1, 2]
    ));
}

#[test]
fn rejects_invalid_json() {
    let err = Automaton::from_json("[{").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}
