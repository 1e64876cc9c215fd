use std::path::PathBuf;

use circomata_compiler::LookupTable;

use super::loader::{GraphInput, load_automaton, write_output};

pub struct LookupArgs {
    pub input: GraphInput,
    pub output: Option<PathBuf>,
}

pub fn run(args: LookupArgs) {
    let automaton = load_automaton(&args.input).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let table = LookupTable::build(&automaton).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if let Err(msg) = write_output(args.output.as_deref(), &table.render()) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}
