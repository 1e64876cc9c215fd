use std::fs;
use std::path::Path;

use indoc::indoc;

use super::compile::{CompileArgs, execute};
use super::loader::GraphInput;

fn args(graph: &Path, out: &Path, lookup: &Path) -> CompileArgs {
    CompileArgs {
        input: GraphInput {
            graph_path: Some(graph.to_path_buf()),
            ..GraphInput::default()
        },
        output: Some(out.to_path_buf()),
        lookup: Some(lookup.to_path_buf()),
        template: Some("Regex".to_owned()),
        window: "msg_bytes".to_owned(),
        annotate: false,
    }
}

#[test]
fn writes_circuit_and_lookup_table() {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("dfa.json");
    let out = dir.path().join("regex.circom");
    let lookup = dir.path().join("lookup.txt");
    fs::write(
        &graph,
        indoc! {r#"
            [
              {"type": "", "edges": {"[\"h\",\"i\"]": 1}},
              {"type": "accept", "edges": {}}
            ]
        "#},
    )
    .unwrap();

    execute(&args(&graph, &out, &lookup)).unwrap();

    let circuit = fs::read_to_string(&out).unwrap();
    assert!(circuit.starts_with("pragma circom 2.1.4;\n"));
    assert!(circuit.contains("template Regex(msg_bytes) {"));
    assert!(circuit.contains("component multi_or[1][msg_bytes];"));
    assert_eq!(fs::read_to_string(&lookup).unwrap(), "1\n0 1 104\n0 1 105\n");
    assert_eq!(entries(dir.path()), ["dfa.json", "lookup.txt", "regex.circom"]);
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn failed_circuit_write_leaves_no_lookup_table() {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("dfa.json");
    let out = dir.path().join("missing_dir").join("regex.circom");
    let lookup = dir.path().join("lookup.txt");
    fs::write(
        &graph,
        r#"[{"type": "", "edges": {"[\"a\"]": 1}}, {"type": "accept", "edges": {}}]"#,
    )
    .unwrap();

    let err = execute(&args(&graph, &out, &lookup)).unwrap_err();

    assert!(err.starts_with("failed to write '"), "{err}");
    assert!(err.contains("regex.circom"), "{err}");
    assert!(!lookup.exists());
    assert_eq!(entries(dir.path()), ["dfa.json"]);
}

#[test]
fn existing_lookup_table_survives_a_failed_compile() {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("dfa.json");
    let out = dir.path().join("missing_dir").join("regex.circom");
    let lookup = dir.path().join("lookup.txt");
    fs::write(
        &graph,
        r#"[{"type": "", "edges": {"[\"a\"]": 1}}, {"type": "accept", "edges": {}}]"#,
    )
    .unwrap();
    fs::write(&lookup, "previous\n").unwrap();

    execute(&args(&graph, &out, &lookup)).unwrap_err();

    assert_eq!(fs::read_to_string(&lookup).unwrap(), "previous\n");
}

#[test]
fn nothing_is_written_on_encoding_failure() {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("dfa.json");
    let out = dir.path().join("regex.circom");
    let lookup = dir.path().join("lookup.txt");
    fs::write(
        &graph,
        r#"[{"type": "", "edges": {"[\"π\"]": 1}}, {"type": "accept", "edges": {}}]"#,
    )
    .unwrap();

    let err = execute(&args(&graph, &out, &lookup)).unwrap_err();

    assert!(err.starts_with("encoding failed: "), "{err}");
    assert!(!out.exists());
    assert!(!lookup.exists());
}

#[test]
fn nothing_is_written_for_invalid_automaton() {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("dfa.json");
    let out = dir.path().join("regex.circom");
    let lookup = dir.path().join("lookup.txt");
    fs::write(
        &graph,
        r#"[{"type": "accept", "edges": {"[\"a\"]": 1}}, {"type": "", "edges": {}}]"#,
    )
    .unwrap();

    let err = execute(&args(&graph, &out, &lookup)).unwrap_err();

    assert_eq!(err, "invalid automaton: accept node must not be the start node 0");
    assert!(!out.exists());
    assert!(!lookup.exists());
}
