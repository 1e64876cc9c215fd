//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Every command takes its automaton the same way: a JSON file, stdin, or
//! a pattern run through an external generator.

use clap::Command;

use super::args::*;

/// Add the automaton input args.
fn with_graph_args(cmd: Command) -> Command {
    cmd.arg(graph_path_arg())
        .arg(pattern_arg())
        .arg(generator_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("circomata")
        .about("Compile regex automata into Circom constraint programs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(check_command())
        .subcommand(lookup_command())
        .subcommand(stats_command())
}

/// Compile an automaton to Circom.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile an automaton to a Circom circuit")
        .override_usage(
            "\
  circomata compile <GRAPH> [-o <FILE>] [--lookup <FILE>]
  circomata compile -p <PATTERN> --generator <CMD>",
        )
        .after_help(
            r#"EXAMPLES:
  circomata compile dfa.json                       # template body to stdout
  circomata compile dfa.json --template Regex      # complete Circom file
  circomata compile dfa.json --lookup lookup.txt   # also write the lookup table
  cat dfa.json | circomata compile -               # read from stdin
  circomata compile -p 'a[0-9]+' --generator 'npx tsx lexical.js'"#,
        )
        .arg(output_arg())
        .arg(lookup_arg())
        .arg(template_arg())
        .arg(window_arg())
        .arg(annotate_arg());

    with_graph_args(cmd)
}

/// Validate an automaton.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an automaton")
        .override_usage(
            "\
  circomata check <GRAPH>
  circomata check -p <PATTERN> --generator <CMD>",
        )
        .after_help(
            r#"EXAMPLES:
  circomata check dfa.json      # silent on success
  circomata check -             # read from stdin"#,
        );

    with_graph_args(cmd)
}

/// Print the transition lookup table.
pub fn lookup_command() -> Command {
    let cmd = Command::new("lookup")
        .about("Print the transition lookup table")
        .override_usage(
            "\
  circomata lookup <GRAPH> [-o <FILE>]
  circomata lookup -p <PATTERN> --generator <CMD>",
        )
        .arg(output_arg());

    with_graph_args(cmd)
}

/// Print component counts.
pub fn stats_command() -> Command {
    let cmd = Command::new("stats")
        .about("Print the number of components per kind")
        .override_usage(
            "\
  circomata stats <GRAPH>
  circomata stats -p <PATTERN> --generator <CMD>",
        );

    with_graph_args(cmd)
}
