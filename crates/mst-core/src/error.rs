// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for graph mutation and MST computation.
use thiserror::Error;

use crate::graph::{EdgeId, NodeId, Weight, MAX_WEIGHT, MIN_WEIGHT};

/// Rejection returned by validated graph mutations.
///
/// Always raised before any mutation: a rejected call leaves the graph
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Both endpoints are the same node.
    #[error("[MST_SELF_LOOP] node {node} cannot be connected to itself")]
    SelfLoop {
        /// The repeated endpoint.
        node: NodeId,
    },
    /// An endpoint does not exist.
    #[error("[MST_UNKNOWN_NODE] node {node} does not exist")]
    UnknownNode {
        /// The missing endpoint.
        node: NodeId,
    },
    /// An edge already joins the unordered pair.
    #[error("[MST_DUPLICATE_EDGE] edge {existing} already connects {a} and {b}")]
    DuplicateEdge {
        /// First requested endpoint.
        a: NodeId,
        /// Second requested endpoint.
        b: NodeId,
        /// Id of the edge already joining them.
        existing: EdgeId,
    },
    /// Weight lies outside `[MIN_WEIGHT, MAX_WEIGHT]`.
    #[error("[MST_WEIGHT_RANGE] weight {weight} outside [-1000, 1000]")]
    WeightOutOfRange {
        /// The rejected weight.
        weight: i64,
    },
    /// No edge carries the requested id.
    #[error("[MST_UNKNOWN_EDGE] edge {edge} does not exist")]
    UnknownEdge {
        /// The missing edge id.
        edge: EdgeId,
    },
}

/// Graph state that makes an MST request meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// Fewer than two edges exist.
    #[error("[MST_TOO_FEW_EDGES] need at least 2 edges, graph has {found}")]
    TooFewEdges {
        /// Current edge count.
        found: usize,
    },
    /// Some node cannot be reached from the others.
    #[error("[MST_DISCONNECTED] graph is not connected")]
    Disconnected,
    /// The requested start node does not exist.
    #[error("[MST_UNKNOWN_START] start node {node} does not exist")]
    UnknownNode {
        /// The missing start node.
        node: NodeId,
    },
}

/// Failure of an MST engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MstError {
    /// The graph does not satisfy the engine's preconditions.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    /// Borůvka finished a round without merging anything.
    ///
    /// Reaching this on a graph that passed the connectivity check means the
    /// engine or the check is wrong; treat it as fatal.
    #[error("[MST_STALLED] Borůvka round {round} merged nothing with {components} components left")]
    Stalled {
        /// 1-based round number that made no progress.
        round: usize,
        /// Components remaining when the round stalled.
        components: usize,
    },
}

impl MstError {
    /// Returns `true` for violations of engine invariants (as opposed to
    /// caller-side precondition failures).
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Stalled { .. })
    }
}

/// Failure to rebuild a graph from a [`GraphDocument`](crate::GraphDocument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The edge at `index` in the document was rejected.
    #[error("edge #{index} rejected: {source}")]
    Edge {
        /// Position of the edge in the document's edge list.
        index: usize,
        /// Why it was rejected.
        source: ValidationError,
    },
}

pub(crate) fn check_weight(weight: i64) -> Result<Weight, ValidationError> {
    if (i64::from(MIN_WEIGHT)..=i64::from(MAX_WEIGHT)).contains(&weight) {
        Weight::try_from(weight).map_err(|_| ValidationError::WeightOutOfRange { weight })
    } else {
        Err(ValidationError::WeightOutOfRange { weight })
    }
}
