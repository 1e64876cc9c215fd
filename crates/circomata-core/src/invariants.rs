//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Automaton, Node, NodeId};

impl Automaton {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        self.node(id).unwrap_or_else(|| {
            panic!(
                "Automaton: node {id} not found \
                 (automaton has {} nodes; ids must come from this automaton)",
                self.len()
            )
        })
    }
}
