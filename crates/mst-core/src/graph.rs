// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Graph store: validated mutation, contiguous renumbering, connectivity.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_weight, MstError, PreconditionError, ValidationError};
use crate::matrix::WeightMatrix;
use crate::mst::{self, Algorithm, MstResult};

/// Node identifier; always an index in `[0, node_count)`.
pub type NodeId = usize;
/// Edge identifier; always an index in `[0, edge_count)`.
pub type EdgeId = usize;
/// Edge weight.
pub type Weight = i32;

/// Smallest accepted edge weight.
pub const MIN_WEIGHT: Weight = -1000;
/// Largest accepted edge weight.
pub const MAX_WEIGHT: Weight = 1000;

/// A graph vertex. Coordinates are opaque payload kept for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Current identifier.
    pub id: NodeId,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// An undirected weighted edge.
///
/// `node1`/`node2` keep the order they were created with; equality of
/// undirected pairs goes through [`Edge::connects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Current identifier.
    pub id: EdgeId,
    /// First endpoint.
    pub node1: NodeId,
    /// Second endpoint.
    pub node2: NodeId,
    /// Weight in `[MIN_WEIGHT, MAX_WEIGHT]`.
    pub weight: Weight,
}

impl Edge {
    /// Returns `true` if this edge joins the unordered pair `{a, b}`.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.node1 == a && self.node2 == b) || (self.node1 == b && self.node2 == a)
    }

    /// Returns `true` if `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.node1 == node || self.node2 == node
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.node1 == node {
            Some(self.node2)
        } else if self.node2 == node {
            Some(self.node1)
        } else {
            None
        }
    }
}

/// Editable weighted undirected graph.
///
/// Invariants held after every public call:
/// - node ids are exactly `0..node_count()` in storage order;
/// - edge ids are exactly `0..edge_count()` in storage order;
/// - every edge references existing nodes, has no self-loop, and no two edges
///   join the same unordered pair;
/// - the last-MST slot, when present, describes the current graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    last_mst: Option<MstResult>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks a node up by id.
    pub fn find_node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks an edge up by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// The edge joining `{a, b}`, in either direction.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    /// Result of the last successful [`Graph::minimum_spanning_tree`] call,
    /// cleared by any mutation since.
    pub fn last_mst(&self) -> Option<&MstResult> {
        self.last_mst.as_ref()
    }

    /// Appends a node with the next id.
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node { id, x, y });
        self.last_mst = None;
        debug!(node = id, "node added");
        id
    }

    /// Moves a node. Returns `false` if `id` does not exist.
    pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.x = x;
                node.y = y;
                true
            }
            None => false,
        }
    }

    /// Deletes a node and every edge touching it, then renumbers nodes and
    /// edges contiguously. No-op if `id` does not exist.
    pub fn remove_node(&mut self, id: NodeId) {
        let Some(pos) = self.nodes.iter().position(|n| n.id == id) else {
            return;
        };
        self.nodes.remove(pos);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        self.renumber_nodes();
        self.renumber_edges();
        self.last_mst = None;
        debug!(
            node = id,
            dropped_edges = before - self.edges.len(),
            "node removed"
        );
    }

    /// Adds the undirected edge `{a, b}`.
    ///
    /// Checks run in a fixed order (self-loop, unknown endpoint, duplicate,
    /// weight range) and the first failure is returned with the graph left
    /// unchanged.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: i64) -> Result<EdgeId, ValidationError> {
        if a == b {
            return Err(ValidationError::SelfLoop { node: a });
        }
        for node in [a, b] {
            if self.find_node_by_id(node).is_none() {
                return Err(ValidationError::UnknownNode { node });
            }
        }
        if let Some(existing) = self.edge_between(a, b) {
            return Err(ValidationError::DuplicateEdge {
                a,
                b,
                existing: existing.id,
            });
        }
        let weight = check_weight(weight)?;

        let id = self.edges.len();
        self.edges.push(Edge {
            id,
            node1: a,
            node2: b,
            weight,
        });
        self.last_mst = None;
        debug!(edge = id, a, b, weight, "edge added");
        Ok(id)
    }

    /// Replaces the weight of edge `id`.
    pub fn set_edge_weight(&mut self, id: EdgeId, weight: i64) -> Result<(), ValidationError> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.id == id)
            .ok_or(ValidationError::UnknownEdge { edge: id })?;
        let weight = check_weight(weight)?;
        self.edges[pos].weight = weight;
        self.last_mst = None;
        Ok(())
    }

    /// Deletes edge `id` and renumbers the rest. No-op if absent.
    pub fn remove_edge(&mut self, id: EdgeId) {
        let Some(pos) = self.edges.iter().position(|e| e.id == id) else {
            return;
        };
        self.edges.remove(pos);
        self.renumber_edges();
        self.last_mst = None;
        debug!(edge = id, "edge removed");
    }

    fn renumber_nodes(&mut self) {
        let remap: BTreeMap<NodeId, NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(new, node)| (node.id, new))
            .collect();
        for (new, node) in self.nodes.iter_mut().enumerate() {
            node.id = new;
        }
        for edge in &mut self.edges {
            // Edges touching the removed node are already gone, so both
            // endpoints are present in the map.
            if let (Some(&n1), Some(&n2)) = (remap.get(&edge.node1), remap.get(&edge.node2)) {
                edge.node1 = n1;
                edge.node2 = n2;
            }
        }
    }

    fn renumber_edges(&mut self) {
        for (new, edge) in self.edges.iter_mut().enumerate() {
            edge.id = new;
        }
    }

    /// Symmetric weight matrix indexed by node id.
    pub fn to_weight_matrix(&self) -> WeightMatrix {
        let mut matrix = WeightMatrix::zeroed(self.nodes.len());
        for edge in &self.edges {
            matrix.set_symmetric(edge.node1, edge.node2, edge.weight);
        }
        matrix
    }

    /// Neighbour lists indexed by node id.
    pub(crate) fn adjacency(&self) -> Vec<Vec<NodeId>> {
        let mut adj = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            adj[edge.node1].push(edge.node2);
            adj[edge.node2].push(edge.node1);
        }
        adj
    }

    /// Returns `true` when every node is reachable from every other node.
    ///
    /// Graphs with zero or one node count as connected. Traversal uses an
    /// explicit stack.
    pub fn is_connected(&self) -> bool {
        let n = self.nodes.len();
        if n <= 1 {
            return true;
        }
        let adj = self.adjacency();
        let mut visited = vec![false; n];
        let mut stack = vec![0];
        visited[0] = true;
        let mut reached = 1;
        while let Some(node) = stack.pop() {
            for &next in &adj[node] {
                if !visited[next] {
                    visited[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }
        reached == n
    }

    /// Checks the shared MST preconditions: at least two edges and full
    /// connectivity.
    pub fn check_mst_preconditions(&self) -> Result<(), PreconditionError> {
        if self.edges.len() < 2 {
            return Err(PreconditionError::TooFewEdges {
                found: self.edges.len(),
            });
        }
        if !self.is_connected() {
            return Err(PreconditionError::Disconnected);
        }
        Ok(())
    }

    /// Runs `algorithm` after enforcing [`Graph::check_mst_preconditions`]
    /// and stores the result in the last-MST slot.
    ///
    /// Unlike the raw engines in [`crate::mst`], this never returns a
    /// spanning forest.
    pub fn minimum_spanning_tree(&mut self, algorithm: Algorithm) -> Result<&MstResult, MstError> {
        self.check_mst_preconditions()?;
        let result = match algorithm {
            Algorithm::Prim { start } => mst::prim_mst(self, start)?,
            Algorithm::Kruskal => mst::kruskal_mst(self),
            Algorithm::Boruvka => mst::boruvka_mst(self)?,
        };
        debug!(
            %algorithm,
            edges = result.edges.len(),
            total_weight = result.total_weight(),
            steps = result.steps,
            "minimum spanning tree computed"
        );
        Ok(&*self.last_mst.insert(result))
    }
}
