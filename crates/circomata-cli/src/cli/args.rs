//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Automaton JSON file (positional).
pub fn graph_path_arg() -> Arg {
    Arg::new("graph_path")
        .value_name("GRAPH")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("pattern")
        .help("Automaton JSON file, or - for stdin")
}

/// Regex pattern handed to the generator (-p/--pattern).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('p')
        .long("pattern")
        .value_name("PATTERN")
        .requires("generator")
        .help("Build the automaton from a pattern with --generator")
}

/// External automaton generator (--generator).
pub fn generator_arg() -> Arg {
    Arg::new("generator")
        .long("generator")
        .value_name("CMD")
        .help("Command that prints automaton JSON; the pattern is passed as its last argument")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}

/// Lookup-table side output (--lookup).
pub fn lookup_arg() -> Arg {
    Arg::new("lookup")
        .long("lookup")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Also write the transition lookup table to FILE")
}

/// Wrap the output in a complete template (--template).
pub fn template_arg() -> Arg {
    Arg::new("template")
        .long("template")
        .value_name("NAME")
        .help("Emit a complete Circom file with a template of this name")
}

/// Window-size parameter name (--window).
pub fn window_arg() -> Arg {
    Arg::new("window")
        .long("window")
        .value_name("NAME")
        .default_value("num_bytes")
        .help("Name of the window-size parameter")
}

/// Character comments (--annotate).
pub fn annotate_arg() -> Arg {
    Arg::new("annotate")
        .long("annotate")
        .action(ArgAction::SetTrue)
        .help("Comment each check with the class or character it tests")
}
