// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Step-counted MST engines.
//!
//! The engines here are the raw algorithms: they borrow a [`Graph`] and only
//! enforce what they need to terminate. [`kruskal_mst`] returns a spanning
//! forest on a disconnected graph; [`prim_mst`] and [`boruvka_mst`] report the
//! gap as an error. Use [`Graph::minimum_spanning_tree`] for the uniformly
//! checked entry point.
use serde::{Deserialize, Serialize};

use crate::disjoint_set::DisjointSet;
use crate::graph::{Edge, Graph, NodeId};
use crate::steps::StepCounter;

mod boruvka;
mod kruskal;
mod prim;

pub use boruvka::boruvka_mst;
pub use kruskal::kruskal_mst;
pub use prim::prim_mst;

/// Which engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Prim's algorithm grown from `start`.
    Prim {
        /// Seed node of the tree.
        start: NodeId,
    },
    /// Kruskal's algorithm.
    Kruskal,
    /// Borůvka's algorithm.
    Boruvka,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prim { start } => write!(f, "prim(start={start})"),
            Self::Kruskal => f.write_str("kruskal"),
            Self::Boruvka => f.write_str("boruvka"),
        }
    }
}

/// Edges selected by one engine run, in selection order, plus its step count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Engine that produced this result.
    pub algorithm: Algorithm,
    /// Selected edges in the order the engine accepted them.
    pub edges: Vec<Edge>,
    /// Steps charged during the run.
    pub steps: u64,
}

impl MstResult {
    /// Sum of the selected edge weights.
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(|e| i64::from(e.weight)).sum()
    }

    /// Returns `true` when the edges form a spanning tree of `graph`: exactly
    /// `node_count - 1` edges, each present in `graph`, with no cycle.
    pub fn is_spanning_tree_of(&self, graph: &Graph) -> bool {
        let n = graph.node_count();
        if self.edges.len() != n.saturating_sub(1) {
            return false;
        }
        let mut scratch = StepCounter::new();
        let mut sets = DisjointSet::new(n, &mut scratch);
        self.edges.iter().all(|e| {
            graph.edge(e.id) == Some(e) && sets.union(e.node1, e.node2)
        })
    }
}

/// Ascending by weight; used by every engine that sorts candidates.
pub(crate) fn by_weight(a: &Edge, b: &Edge) -> std::cmp::Ordering {
    a.weight.cmp(&b.weight)
}
