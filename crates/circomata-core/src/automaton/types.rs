//! Automaton type definitions and structural validation.

use crate::{CharSet, ValidationError};

/// Node id (index into the automaton's node list).
pub type NodeId = usize;

/// Whether reaching a node means the pattern matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[default]
    Normal,
    Accept,
}

/// Outgoing edge: the characters it consumes and where it leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub label: CharSet,
    pub dest: NodeId,
}

/// One automaton state with its outgoing edges in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub edges: Vec<Edge>,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            edges: Vec::new(),
        }
    }

    pub fn normal(id: NodeId) -> Self {
        Self::new(id, NodeKind::Normal)
    }

    pub fn accept(id: NodeId) -> Self {
        Self::new(id, NodeKind::Accept)
    }

    /// Append an edge consuming any character of `label`.
    pub fn edge(mut self, label: impl Into<CharSet>, dest: NodeId) -> Self {
        self.edges.push(Edge {
            label: label.into(),
            dest,
        });
        self
    }

    pub fn is_accept(&self) -> bool {
        self.kind == NodeKind::Accept
    }
}

/// A validated DFA with a single accept node.
///
/// Invariants (checked by [`Automaton::new`]):
/// - node ids are `0..len()` in order
/// - node 0 is the start node and has no incoming edges
/// - exactly one node is an accept node, and it is not node 0
/// - every edge has a non-empty label and a destination inside the automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    nodes: Vec<Node>,
    accept: NodeId,
}

impl Automaton {
    /// Id of the start node.
    pub const START: NodeId = 0;

    /// Validate `nodes` and build the automaton.
    pub fn new(nodes: Vec<Node>) -> Result<Self, ValidationError> {
        if nodes.is_empty() {
            return Err(ValidationError::Empty);
        }

        for (expected, node) in nodes.iter().enumerate() {
            if node.id != expected {
                return Err(ValidationError::NonDenseIds {
                    expected,
                    found: node.id,
                });
            }
        }

        let len = nodes.len();
        for node in &nodes {
            for edge in &node.edges {
                if edge.label.is_empty() {
                    return Err(ValidationError::EmptyLabel {
                        src: node.id,
                        dst: edge.dest,
                    });
                }
                if edge.dest >= len {
                    return Err(ValidationError::DestinationOutOfRange {
                        src: node.id,
                        dst: edge.dest,
                        len,
                    });
                }
                if edge.dest == Self::START {
                    return Err(ValidationError::StartHasIncoming { src: node.id });
                }
            }
        }

        let accepts: Vec<NodeId> = nodes.iter().filter(|n| n.is_accept()).map(|n| n.id).collect();
        let accept = match accepts.as_slice() {
            [] => return Err(ValidationError::NoAcceptNode),
            [only] => *only,
            _ => return Err(ValidationError::MultipleAcceptNodes(accepts)),
        };
        if accept == Self::START {
            return Err(ValidationError::AcceptIsStart);
        }

        log::debug!(
            "loaded automaton: {} nodes, {} edges, accept node {}",
            len,
            nodes.iter().map(|n| n.edges.len()).sum::<usize>(),
            accept
        );

        Ok(Self { nodes, accept })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a valid automaton has at least a start and an accept node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Outgoing edges of `id` in declaration order.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.ensure_node(id).edges
    }

    pub fn start(&self) -> NodeId {
        Self::START
    }

    pub fn accept(&self) -> NodeId {
        self.accept
    }

    /// Total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }
}
