//! Constraint emission from validated automata.
//!
//! Converts an automaton into a typed [`Program`]. This module handles:
//! - Per-node transition logic (edge conditions, fan-in ORs)
//! - Exact-size component declarations
//! - Boundary rows of the state matrix
//! - The accept reduction

mod accept;
mod counters;
mod declare;
mod emitter;


pub use counters::ComponentCounts;
pub use emitter::Emitter;

use circomata_core::{Automaton, EncodingError};

use crate::ir::Program;
use crate::reverse::ReverseAdjacency;

/// Emit the program for `automaton`, together with the final component counts.
pub fn emit(
    automaton: &Automaton,
    reverse: &ReverseAdjacency<'_>,
) -> Result<(Program, ComponentCounts), EncodingError> {
    Emitter::new(automaton, reverse).emit()
}
