// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mst-core: editable weighted undirected graph plus minimum spanning tree
//! engines (Prim, Kruskal, Borůvka) that report a deterministic step count.
//!
//! The step count is a teaching metric, not a benchmark: every engine charges
//! one step per comparison/assignment-heavy operation, and candidate ordering
//! goes through a quadratic insertion sort so repeated comparisons show up in
//! the total.
//!
//! # Ownership
//!
//! [`Graph`] exclusively owns its nodes and edges. Engines borrow it read-only
//! and hand back an [`MstResult`]; only the checked entry point
//! [`Graph::minimum_spanning_tree`] writes the "last MST" slot. There is no
//! internal locking: callers that share a graph across threads must serialize
//! access themselves.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod disjoint_set;
mod document;
mod error;
mod export;
mod graph;
mod matrix;
/// Minimum spanning tree engines and their shared result type.
pub mod mst;
mod sort;
mod steps;

pub use disjoint_set::DisjointSet;
pub use document::{EdgeSpec, GraphDocument, NodeSpec};
pub use error::{DocumentError, MstError, PreconditionError, ValidationError};
pub use export::{ExportEdge, ExportReport};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId, Weight, MAX_WEIGHT, MIN_WEIGHT};
pub use matrix::WeightMatrix;
pub use mst::{boruvka_mst, kruskal_mst, prim_mst, Algorithm, MstResult};
pub use sort::insertion_sort;
pub use steps::StepCounter;
