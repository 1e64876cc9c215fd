//! One compilation: program, counts and lookup table for a single automaton.

use circomata_core::Automaton;

use crate::emit::{self, ComponentCounts};
use crate::ir::Program;
use crate::lookup::LookupTable;
use crate::render::{self, Config};
use crate::reverse::ReverseAdjacency;
use crate::Result;

/// Both outputs of one automaton, built together.
///
/// Construction fails as a whole: if either the program or the lookup table
/// cannot be built, no text is available at all.
#[derive(Debug, Clone)]
pub struct Compilation {
    program: Program,
    counts: ComponentCounts,
    lookup: LookupTable,
}

impl Compilation {
    pub fn new(automaton: &Automaton) -> Result<Self> {
        let reverse = ReverseAdjacency::build(automaton);
        let (program, counts) = emit::emit(automaton, &reverse)?;
        let lookup = LookupTable::build(automaton)?;
        Ok(Self {
            program,
            counts,
            lookup,
        })
    }

    /// Load, validate and compile an automaton in its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let automaton = Automaton::from_json(json)?;
        Self::new(&automaton)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn counts(&self) -> ComponentCounts {
        self.counts
    }

    pub fn lookup(&self) -> &LookupTable {
        &self.lookup
    }

    pub fn render(&self, config: &Config) -> String {
        render::render(&self.program, config)
    }
}

/// Compile and render in one step.
pub fn compile(automaton: &Automaton, config: &Config) -> Result<String> {
    Ok(Compilation::new(automaton)?.render(config))
}
