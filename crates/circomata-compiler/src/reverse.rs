//! Incoming-edge index.
//!
//! The emitter walks the automaton backwards: each node's next state is the
//! OR of its incoming edges. Entries keep the order of the input edge
//! declarations (source node ascending, then per-node declaration order),
//! which fixes component numbering.

use circomata_core::{Automaton, CharSet, NodeId};

/// One edge seen from its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incoming<'a> {
    pub label: &'a CharSet,
    pub source: NodeId,
}

/// For each node, the edges that lead into it.
#[derive(Debug, Clone)]
pub struct ReverseAdjacency<'a> {
    incoming: Vec<Vec<Incoming<'a>>>,
}

impl<'a> ReverseAdjacency<'a> {
    pub fn build(automaton: &'a Automaton) -> Self {
        let mut incoming = vec![Vec::new(); automaton.len()];
        for node in automaton.nodes() {
            for edge in &node.edges {
                incoming[edge.dest].push(Incoming {
                    label: &edge.label,
                    source: node.id,
                });
            }
        }
        Self { incoming }
    }

    /// Edges leading into `node`. Empty for unknown ids.
    pub fn incoming(&self, node: NodeId) -> &[Incoming<'a>] {
        self.incoming.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes covered by the index.
    pub fn len(&self) -> usize {
        self.incoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty()
    }
}
