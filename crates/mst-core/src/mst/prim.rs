// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prim's algorithm over a fully re-sorted candidate list.
use tracing::trace;

use super::{by_weight, Algorithm, MstResult};
use crate::error::{MstError, PreconditionError};
use crate::graph::{Edge, Graph, NodeId};
use crate::sort::insertion_sort;
use crate::steps::StepCounter;

/// Grows a minimum spanning tree from `start`.
///
/// Every round re-sorts the whole candidate list with the step-counted
/// insertion sort and pops the cheapest edge, so the step count reflects the
/// repeated comparisons rather than a heap's amortised cost.
///
/// Fails with [`PreconditionError::TooFewEdges`] below two edges, with
/// [`PreconditionError::UnknownNode`] if `start` does not exist, and with
/// [`PreconditionError::Disconnected`] when candidates run out before every
/// node joined the tree.
pub fn prim_mst(graph: &Graph, start: NodeId) -> Result<MstResult, MstError> {
    let mut steps = StepCounter::new();
    if graph.edge_count() < 2 {
        return Err(PreconditionError::TooFewEdges {
            found: graph.edge_count(),
        }
        .into());
    }
    if graph.find_node_by_id(start).is_none() {
        return Err(PreconditionError::UnknownNode { node: start }.into());
    }

    let n = graph.node_count();
    let mut in_tree = vec![false; n];
    let mut tree_size = 1;
    in_tree[start] = true;

    let mut candidates = Vec::new();
    push_candidates(graph, start, &in_tree, &mut candidates, &mut steps);

    let mut selected = Vec::with_capacity(n - 1);
    while tree_size < n {
        if candidates.is_empty() {
            return Err(PreconditionError::Disconnected.into());
        }
        insertion_sort(&mut candidates, &mut steps, by_weight);
        let cheapest = candidates.remove(0);
        steps.tick();

        let (in1, in2) = (in_tree[cheapest.node1], in_tree[cheapest.node2]);
        if in1 && in2 {
            // Both ends joined after this edge was queued.
            continue;
        }
        let anchor = if in1 { cheapest.node1 } else { cheapest.node2 };
        let Some(joined) = cheapest.other(anchor) else {
            continue;
        };
        selected.push(cheapest);
        in_tree[joined] = true;
        tree_size += 1;
        trace!(node = joined, edge = cheapest.id, "prim: node joined tree");
        push_candidates(graph, joined, &in_tree, &mut candidates, &mut steps);
    }

    Ok(MstResult {
        algorithm: Algorithm::Prim { start },
        edges: selected,
        steps: steps.get(),
    })
}

/// Queues every edge at `node` whose other endpoint is still outside the tree.
fn push_candidates(
    graph: &Graph,
    node: NodeId,
    in_tree: &[bool],
    candidates: &mut Vec<Edge>,
    steps: &mut StepCounter,
) {
    for edge in graph.edges().iter().filter(|e| e.touches(node)) {
        if in_tree[edge.node1] && in_tree[edge.node2] {
            continue;
        }
        candidates.push(*edge);
        steps.tick();
    }
}
