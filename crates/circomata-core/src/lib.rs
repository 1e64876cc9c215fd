#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for circomata.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the automaton JSON printed by
//!   the external DFA generator
//! - **Model layer**: a validated, immutable [`Automaton`] with dense node ids
//!
//! Everything downstream (circuit emission, lookup tables) trusts the model
//! layer, so every structural invariant is checked once, at load time.

mod automaton;
mod charset;
mod error;
mod invariants;
mod source;

#[cfg(test)]
mod charset_tests;

pub use automaton::{Automaton, Edge, Node, NodeId, NodeKind};
pub use charset::CharSet;
pub use error::{EncodingError, LoadError, ValidationError};
pub use source::{AutomatonSource, SourceError};
