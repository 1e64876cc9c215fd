use circomata_compiler::{Compilation, ComponentCounts};

use super::loader::{GraphInput, load_automaton};

pub struct StatsArgs {
    pub input: GraphInput,
}

pub fn run(args: StatsArgs) {
    let automaton = load_automaton(&args.input).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let compilation = Compilation::new(&automaton).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    println!("nodes     {}", automaton.len());
    println!("edges     {}", automaton.edge_count());
    println!("start     {}", automaton.start());
    println!("accept    {}", automaton.accept());
    print!("{}", format_counts(&compilation.counts()));
    println!("lookup    {}", compilation.lookup().len());
}

fn format_counts(counts: &ComponentCounts) -> String {
    let mut out = String::new();
    for (kind, count) in counts.iter() {
        out.push_str(&format!("{:<10}{count}\n", kind.array()));
    }
    out.push_str(&format!("{:<10}{}\n", "total", counts.total()));
    out
}
