// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serializable graph description.
//!
//! A document carries no ids: nodes are numbered by position and edges refer
//! to those positions. Loading replays every entry through the validated
//! constructors, so a document can never produce a graph that violates the
//! store's invariants.
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::DocumentError;
use crate::graph::{Graph, NodeId};

/// A node entry; its id is its index in [`GraphDocument::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Horizontal position.
    #[serde(default)]
    pub x: f64,
    /// Vertical position.
    #[serde(default)]
    pub y: f64,
}

/// An edge entry between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// First endpoint.
    pub node1: NodeId,
    /// Second endpoint.
    pub node2: NodeId,
    /// Requested weight; range-checked on load.
    pub weight: i64,
}

/// Plain nodes + edges lists, as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Nodes in id order.
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    /// Edges in id order.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl Graph {
    /// Builds a graph from `doc`, rejecting the first invalid edge.
    pub fn from_document(doc: &GraphDocument) -> Result<Self, DocumentError> {
        let mut graph = Self::new();
        for node in &doc.nodes {
            graph.add_node(node.x, node.y);
        }
        for (index, edge) in doc.edges.iter().enumerate() {
            if let Err(source) = graph.add_edge(edge.node1, edge.node2, edge.weight) {
                warn!(index, %source, "document edge rejected");
                return Err(DocumentError::Edge { index, source });
            }
        }
        Ok(graph)
    }

    /// Snapshot of the current graph as a document.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self
                .nodes()
                .iter()
                .map(|n| NodeSpec { x: n.x, y: n.y })
                .collect(),
            edges: self
                .edges()
                .iter()
                .map(|e| EdgeSpec {
                    node1: e.node1,
                    node2: e.node2,
                    weight: i64::from(e.weight),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn parses_json_with_defaults() {
        let doc: GraphDocument = serde_json::from_str(
            r#"{ "nodes": [{}, {"x": 4.5, "y": 1}], "edges": [{"node1": 1, "node2": 0, "weight": -3}] }"#,
        )
        .unwrap();
        let g = Graph::from_document(&doc).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.find_node_by_id(1).map(|n| n.x), Some(4.5));
        let e = g.edge(0).copied().unwrap();
        assert_eq!((e.node1, e.node2, e.weight), (1, 0, -3));
        assert_eq!(g.to_document(), doc);
    }

    #[test]
    fn reports_index_of_rejected_edge() {
        let doc = GraphDocument {
            nodes: vec![NodeSpec::default(); 2],
            edges: vec![
                EdgeSpec {
                    node1: 0,
                    node2: 1,
                    weight: 1,
                },
                EdgeSpec {
                    node1: 1,
                    node2: 0,
                    weight: 2,
                },
            ],
        };
        assert_eq!(
            Graph::from_document(&doc).unwrap_err(),
            DocumentError::Edge {
                index: 1,
                source: ValidationError::DuplicateEdge {
                    a: 1,
                    b: 0,
                    existing: 0
                }
            }
        );
    }

    #[test]
    fn float_weights_fail_to_parse() {
        let parsed: Result<GraphDocument, _> = serde_json::from_str(
            r#"{ "nodes": [{}, {}], "edges": [{"node1": 0, "node2": 1, "weight": 1.5}] }"#,
        );
        assert!(parsed.is_err());
    }
}
