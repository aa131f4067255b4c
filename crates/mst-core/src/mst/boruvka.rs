// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Borůvka's algorithm.
use tracing::trace;

use super::{Algorithm, MstResult};
use crate::disjoint_set::DisjointSet;
use crate::error::MstError;
use crate::graph::{Edge, Graph};
use crate::steps::StepCounter;

/// Minimum spanning tree by rounds of per-component cheapest outgoing edges.
///
/// Each round scans every edge once, keeping for each component root the
/// strictly cheapest edge leaving it (first seen wins ties). The recorded
/// edges are then accepted in root order, skipping any whose endpoints an
/// earlier acceptance in the same round already joined.
///
/// A round that merges nothing means no edge leaves some component; it is
/// reported as [`MstError::Stalled`] instead of looping.
pub fn boruvka_mst(graph: &Graph) -> Result<MstResult, MstError> {
    let n = graph.node_count();
    let mut steps = StepCounter::new();
    let mut sets = DisjointSet::new(n, &mut steps);
    let mut selected = Vec::with_capacity(n.saturating_sub(1));
    let mut round = 0;

    while sets.components() > 1 {
        round += 1;
        let mut cheapest: Vec<Option<Edge>> = vec![None; n];
        for edge in graph.edges() {
            let r1 = sets.find(edge.node1);
            let r2 = sets.find(edge.node2);
            if r1 == r2 {
                continue;
            }
            for root in [r1, r2] {
                if cheapest[root].is_none_or(|best| best.weight > edge.weight) {
                    cheapest[root] = Some(*edge);
                    steps.tick();
                }
            }
        }

        let before = sets.components();
        for edge in cheapest.into_iter().flatten() {
            if !sets.same(edge.node1, edge.node2) {
                selected.push(edge);
                sets.union(edge.node1, edge.node2);
                steps.tick();
            }
        }
        if sets.components() == before {
            return Err(MstError::Stalled {
                round,
                components: before,
            });
        }
        trace!(round, components = sets.components(), "boruvka: round merged");
    }

    Ok(MstResult {
        algorithm: Algorithm::Boruvka,
        edges: selected,
        steps: steps.get(),
    })
}
