// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Kruskal's algorithm.
use super::{by_weight, Algorithm, MstResult};
use crate::disjoint_set::DisjointSet;
use crate::graph::Graph;
use crate::sort::insertion_sort;
use crate::steps::StepCounter;

/// Minimum spanning forest by ascending-weight edge scan.
///
/// Edges are sorted with the stable insertion sort, so equal weights are
/// considered in edge-id order. The graph itself is not reordered. On a
/// disconnected graph the result holds fewer than `node_count - 1` edges.
pub fn kruskal_mst(graph: &Graph) -> MstResult {
    let mut steps = StepCounter::new();
    let mut sorted = graph.edges().to_vec();
    insertion_sort(&mut sorted, &mut steps, by_weight);

    let mut sets = DisjointSet::new(graph.node_count(), &mut steps);
    let mut selected = Vec::with_capacity(graph.node_count().saturating_sub(1));
    for edge in sorted {
        steps.tick();
        if !sets.same(edge.node1, edge.node2) {
            selected.push(edge);
            sets.union(edge.node1, edge.node2);
            steps.tick();
        }
    }

    MstResult {
        algorithm: Algorithm::Kruskal,
        edges: selected,
        steps: steps.get(),
    }
}
