//! Flat transition table for lookup-based backends.
//!
//! Format: the accept node id on the first line, then one
//! `source destination code` line per character per edge.

use std::fmt;

use circomata_core::{Automaton, EncodingError, NodeId};

/// One `(source, destination, byte)` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub source: NodeId,
    pub dest: NodeId,
    pub code: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    accept: NodeId,
    transitions: Vec<Transition>,
}

impl LookupTable {
    /// Walk every edge in declaration order, one transition per character
    /// in ascending code order.
    pub fn build(automaton: &Automaton) -> Result<Self, EncodingError> {
        let mut transitions = Vec::new();
        for node in automaton.nodes() {
            for edge in &node.edges {
                for ch in edge.label.iter() {
                    let code = u8::try_from(ch).map_err(|_| EncodingError::CodeOutOfRange {
                        ch,
                        src: node.id,
                        dst: edge.dest,
                    })?;
                    transitions.push(Transition {
                        source: node.id,
                        dest: edge.dest,
                        code,
                    });
                }
            }
        }

        log::debug!("lookup table: {} transitions", transitions.len());
        Ok(Self {
            accept: automaton.accept(),
            transitions,
        })
    }

    pub fn accept(&self) -> NodeId {
        self.accept
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.accept)?;
        for t in &self.transitions {
            writeln!(f, "{} {} {}", t.source, t.dest, t.code)?;
        }
        Ok(())
    }
}
