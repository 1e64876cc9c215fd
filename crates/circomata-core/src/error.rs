//! Error types for loading and validating automata.

use crate::NodeId;

/// An automaton that breaks one of the structural invariants.
///
/// Raised before any output is produced. The message names the invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("automaton has no nodes")]
    Empty,

    #[error("invalid node id {0:?} (node ids must be decimal integers)")]
    InvalidNodeId(String),

    #[error("node ids must be dense: expected node {expected}, found node {found}")]
    NonDenseIds { expected: NodeId, found: NodeId },

    #[error("node {node} has unknown kind {kind:?} (expected \"normal\" or \"accept\")")]
    UnknownKind { node: NodeId, kind: String },

    #[error("node {node} has malformed edge label {label:?} (expected single characters)")]
    MalformedLabel { node: NodeId, label: String },

    #[error("edge {src} -> {dst} has an empty character set")]
    EmptyLabel { src: NodeId, dst: NodeId },

    #[error("edge {src} -> {dst} points outside the automaton ({len} nodes)")]
    DestinationOutOfRange { src: NodeId, dst: NodeId, len: usize },

    #[error("start node 0 must not have incoming edges (found one from node {src})")]
    StartHasIncoming { src: NodeId },

    #[error("automaton has no accept node (exactly one is required)")]
    NoAcceptNode,

    #[error("automaton has {} accept nodes {:?} (exactly one is required)", .0.len(), .0)]
    MultipleAcceptNodes(Vec<NodeId>),

    #[error("accept node must not be the start node 0")]
    AcceptIsStart,
}

/// A character that cannot be expressed as a single input byte.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("character {ch:?} on edge {src} -> {dst} does not fit in a single byte")]
    CodeOutOfRange { ch: char, src: NodeId, dst: NodeId },
}

/// Error while reading an automaton from its JSON form.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid automaton JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid automaton: {0}")]
    Validation(#[from] ValidationError),
}
