//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Input handling: file, stdin and pattern inputs parse, conflicts are rejected
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Subcommand wiring in `build_cli`

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, compile_command, lookup_command, stats_command};

#[test]
fn compile_defaults() {
    let m = compile_command()
        .try_get_matches_from(["compile", "dfa.json"])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.graph_path, Some(PathBuf::from("dfa.json")));
    assert_eq!(params.pattern, None);
    assert_eq!(params.output, None);
    assert_eq!(params.lookup, None);
    assert_eq!(params.template, None);
    assert_eq!(params.window, "num_bytes");
    assert!(!params.annotate);
}

#[test]
fn compile_all_flags() {
    let m = compile_command()
        .try_get_matches_from([
            "compile",
            "dfa.json",
            "-o",
            "regex.circom",
            "--lookup",
            "lookup.txt",
            "--template",
            "EmailRegex",
            "--window",
            "msg_bytes",
            "--annotate",
        ])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.output, Some(PathBuf::from("regex.circom")));
    assert_eq!(params.lookup, Some(PathBuf::from("lookup.txt")));
    assert_eq!(params.template.as_deref(), Some("EmailRegex"));
    assert_eq!(params.window, "msg_bytes");
    assert!(params.annotate);
}

#[test]
fn compile_accepts_stdin_dash() {
    let m = compile_command()
        .try_get_matches_from(["compile", "-"])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.graph_path, Some(PathBuf::from("-")));
}

#[test]
fn pattern_with_generator() {
    let m = compile_command()
        .try_get_matches_from([
            "compile",
            "-p",
            "a[0-9]+",
            "--generator",
            "npx tsx lexical.js",
        ])
        .unwrap();
    let params = CompileParams::from_matches(&m);

    assert_eq!(params.graph_path, None);
    assert_eq!(params.pattern.as_deref(), Some("a[0-9]+"));
    assert_eq!(params.generator.as_deref(), Some("npx tsx lexical.js"));
}

#[test]
fn pattern_requires_generator() {
    let result = check_command().try_get_matches_from(["check", "-p", "abc"]);
    assert!(result.is_err());
}

#[test]
fn pattern_conflicts_with_graph_file() {
    let result = stats_command().try_get_matches_from([
        "stats",
        "dfa.json",
        "-p",
        "abc",
        "--generator",
        "gen",
    ]);
    assert!(result.is_err());
}

#[test]
fn check_has_no_output_flag() {
    let result = check_command().try_get_matches_from(["check", "dfa.json", "-o", "x"]);
    assert!(result.is_err());
}

#[test]
fn lookup_output() {
    let m = lookup_command()
        .try_get_matches_from(["lookup", "dfa.json", "--output", "table.txt"])
        .unwrap();
    let params = LookupParams::from_matches(&m);

    assert_eq!(params.graph_path, Some(PathBuf::from("dfa.json")));
    assert_eq!(params.output, Some(PathBuf::from("table.txt")));
}

#[test]
fn stats_params() {
    let m = stats_command()
        .try_get_matches_from(["stats", "dfa.json"])
        .unwrap();
    let params = StatsParams::from_matches(&m);

    assert_eq!(params.graph_path, Some(PathBuf::from("dfa.json")));
    assert_eq!(params.generator, None);
}

#[test]
fn build_cli_dispatches_subcommands() {
    let m = build_cli()
        .try_get_matches_from(["circomata", "check", "dfa.json"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();

    assert_eq!(name, "check");
    let params = CheckParams::from_matches(sub);
    assert_eq!(params.graph_path, Some(PathBuf::from("dfa.json")));
}

#[test]
fn build_cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["circomata"]);
    assert!(result.is_err());
}
