use circomata_core::{Automaton, EncodingError, LoadError, Node, ValidationError};
use indoc::indoc;

use crate::{Compilation, Config, Error, compile};

fn single_char() -> Automaton {
    Automaton::new(vec![Node::normal(0).edge("a", 1), Node::accept(1)]).unwrap()
}

#[test]
fn single_character_program() {
    let out = compile(&single_char(), &Config::new()).unwrap();

    insta::assert_snapshot!(out, @r"
component eq[1][num_bytes];
component and[1][num_bytes];
signal states[num_bytes+1][2];

for (var i = 0; i <= num_bytes; i++) {
	states[i][0] <== 1;
}
for (var i = 1; i < 2; i++) {
	states[0][i] <== 0;
}

for (var i = 0; i < num_bytes; i++) {
	eq[0][i] = IsEqual();
	eq[0][i].in[0] <== in[i];
	eq[0][i].in[1] <== 97;
	and[0][i] = AND();
	and[0][i].a <== states[i][0];
	and[0][i].b <== eq[0][i].out;
	states[i+1][1] <== and[0][i].out;
}

signal final_state_sum[num_bytes+1];
final_state_sum[0] <== states[0][1];
for (var i = 1; i <= num_bytes; i++) {
	final_state_sum[i] <== final_state_sum[i-1] + states[i][1];
}
out <== final_state_sum[num_bytes];
");
}

#[test]
fn compilation_is_deterministic() {
    let json = indoc! {r#"
        [
          {"type": "start", "edges": {"[\"a\",\"b\"]": 1, "[\"0\",\"1\",\"2\",\"3\",\"4\",\"5\",\"6\",\"7\",\"8\",\"9\"]": 2}},
          {"type": "", "edges": {"[\"c\"]": 2}},
          {"type": "accept", "edges": {"[\"d\"]": 2}}
        ]
    "#};
    let config = Config::new().annotate(true);

    let first = Compilation::from_json(json).unwrap();
    let second = Compilation::from_json(json).unwrap();

    assert_eq!(first.render(&config), second.render(&config));
    assert_eq!(first.lookup().render(), second.lookup().render());
    assert_eq!(first.counts(), second.counts());
}

#[test]
fn counts_and_lookup_come_from_the_same_automaton() {
    let compilation = Compilation::new(&single_char()).unwrap();

    assert_eq!(compilation.counts().total(), 2);
    assert_eq!(compilation.lookup().render(), "1\n0 1 97\n");
    assert!(!compilation.program().transitions.is_empty());
}

#[test]
fn two_accept_nodes_produce_no_output() {
    let json = indoc! {r#"
        [
          {"type": "", "edges": {"[\"a\"]": 1, "[\"b\"]": 2}},
          {"type": "accept", "edges": {}},
          {"type": "accept", "edges": {}}
        ]
    "#};

    let err = Compilation::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        Error::Load(LoadError::Validation(ValidationError::MultipleAcceptNodes(ref ids))) if ids == &[1, 2]
    ));
}

#[test]
fn no_accept_node_produces_no_output() {
    let json = indoc! {r#"
        [
          {"type": "", "edges": {"[\"a\"]": 1}},
          {"type": "", "edges": {}}
        ]
    "#};

    let err = Compilation::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        Error::Load(LoadError::Validation(ValidationError::NoAcceptNode))
    ));
}

#[test]
fn encoding_failure_produces_no_output() {
    let automaton = Automaton::new(vec![Node::normal(0).edge("aλ", 1), Node::accept(1)]).unwrap();

    let err = Compilation::new(&automaton).unwrap_err();
    assert!(matches!(
        err,
        Error::Encoding(EncodingError::CodeOutOfRange { ch: 'λ', .. })
    ));
    assert_eq!(
        err.to_string(),
        "encoding failed: character 'λ' on edge 0 -> 1 does not fit in a single byte"
    );
}

#[test]
fn one_shot_matches_facade() {
    let automaton = single_char();
    let config = Config::new().template("Regex");

    let direct = compile(&automaton, &config).unwrap();
    let via = Compilation::new(&automaton).unwrap().render(&config);
    assert_eq!(direct, via);
    assert!(direct.starts_with("pragma circom 2.1.4;\n"));
}
