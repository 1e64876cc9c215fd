//! JSON deserialization for generator output.
//!
//! The generator prints either an array of nodes (index = id) or an object
//! keyed by decimal node id. Edge keys are JSON-encoded arrays of
//! one-character strings (`"[\"a\",\"b\"]"`) or a bare character.

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{Automaton, Edge, Node, NodeId, NodeKind};
use crate::{CharSet, LoadError, ValidationError};

impl Automaton {
    /// Parse and validate an automaton from generator JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawGraph = serde_json::from_str(json)?;
        let nodes = raw.into_nodes()?;
        Ok(Self::new(nodes)?)
    }
}

/// Raw graph in either of the generator's layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGraph {
    List(Vec<RawNode>),
    // IndexMap keeps the generator's edge order inside each node; node order
    // comes from the ids themselves.
    Map(IndexMap<String, RawNode>),
}

/// Raw node matching the generator's JSON format.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    edges: IndexMap<String, NodeId>,
}

impl RawGraph {
    fn into_nodes(self) -> Result<Vec<Node>, ValidationError> {
        match self {
            RawGraph::List(nodes) => nodes
                .into_iter()
                .enumerate()
                .map(|(id, raw)| raw.into_node(id))
                .collect(),
            RawGraph::Map(nodes) => {
                let mut numbered = nodes
                    .into_iter()
                    .map(|(key, raw)| {
                        key.parse::<NodeId>()
                            .map(|id| (id, raw))
                            .map_err(|_| ValidationError::InvalidNodeId(key))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                numbered.sort_by_key(|(id, _)| *id);
                numbered
                    .into_iter()
                    .map(|(id, raw)| raw.into_node(id))
                    .collect()
            }
        }
    }
}

impl RawNode {
    fn into_node(self, id: NodeId) -> Result<Node, ValidationError> {
        let kind = match self.kind.as_str() {
            "accept" => NodeKind::Accept,
            // The generator labels ordinary states with "" and the entry with "start".
            "normal" | "" | "start" => NodeKind::Normal,
            other => {
                return Err(ValidationError::UnknownKind {
                    node: id,
                    kind: other.to_string(),
                });
            }
        };

        let edges = self
            .edges
            .into_iter()
            .map(|(key, dest)| {
                Ok(Edge {
                    label: parse_label(id, &key)?,
                    dest,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Node { id, kind, edges })
    }
}

fn parse_label(node: NodeId, key: &str) -> Result<CharSet, ValidationError> {
    let malformed = || ValidationError::MalformedLabel {
        node,
        label: key.to_string(),
    };

    // A bare character, including a lone `[`.
    if let Some(ch) = single_char(key) {
        return Ok(CharSet::from_iter([ch]));
    }

    let symbols: Vec<String> = serde_json::from_str(key).map_err(|_| malformed())?;
    symbols
        .iter()
        .map(|s| single_char(s).ok_or_else(malformed))
        .collect()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
