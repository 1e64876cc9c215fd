//! Automaton model for the DFA handed over by the external generator.
//!
//! This module provides the validated [`Automaton`] and its JSON loader.
//! The JSON side accepts exactly what the generator prints and nothing looser.

mod json;
mod types;

#[cfg(test)]
mod json_tests;

pub use types::{Automaton, Edge, Node, NodeId, NodeKind};
