use circomata_compiler::Compilation;

use super::loader::{GraphInput, load_automaton};

pub struct CheckArgs {
    pub input: GraphInput,
}

pub fn run(args: CheckArgs) {
    let automaton = load_automaton(&args.input).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    // Lowering catches characters that don't fit in a byte.
    if let Err(e) = Compilation::new(&automaton) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
