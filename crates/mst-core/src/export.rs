// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Data handed to export writers: weight matrix plus a Borůvka MST.
use serde::{Deserialize, Serialize};

use crate::error::MstError;
use crate::graph::{Graph, NodeId, Weight};
use crate::mst::Algorithm;

/// One tree edge as written in an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEdge {
    /// First endpoint.
    pub node1: NodeId,
    /// Second endpoint.
    pub node2: NodeId,
    /// Edge weight.
    pub weight: Weight,
}

/// Everything an export needs, captured from a connected graph.
///
/// Formatting is left to the writer; this type only guarantees that the
/// matrix is symmetric and that every tree edge names a current node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    /// Weight matrix rows.
    pub matrix: Vec<Vec<Weight>>,
    /// Tree edges in selection order.
    pub tree: Vec<ExportEdge>,
    /// Steps charged while building the tree.
    pub steps: u64,
}

impl ExportReport {
    /// Runs Borůvka through [`Graph::minimum_spanning_tree`] and captures the
    /// result alongside the weight matrix.
    ///
    /// Fails like the checked entry point: fewer than two edges or a
    /// disconnected graph are rejected before anything is computed.
    pub fn build(graph: &mut Graph) -> Result<Self, MstError> {
        let result = graph.minimum_spanning_tree(Algorithm::Boruvka)?;
        let tree = result
            .edges
            .iter()
            .map(|e| ExportEdge {
                node1: e.node1,
                node2: e.node2,
                weight: e.weight,
            })
            .collect();
        let steps = result.steps;
        Ok(Self {
            matrix: graph.to_weight_matrix().to_rows(),
            tree,
            steps,
        })
    }

    /// Sum of the tree edge weights.
    pub fn total_weight(&self) -> i64 {
        self.tree.iter().map(|e| i64::from(e.weight)).sum()
    }
}
