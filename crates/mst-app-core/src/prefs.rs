// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved solver preferences shared by MST hosts.

use mst_core::{Algorithm, NodeId};
use serde::{Deserialize, Serialize};

/// Config key under which [`SolverPrefs`] are stored.
pub const SOLVER_PREFS_KEY: &str = "solver";

/// Engine selection without Prim's start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmChoice {
    /// Prim's algorithm.
    Prim,
    /// Kruskal's algorithm.
    #[default]
    Kruskal,
    /// Borůvka's algorithm.
    Boruvka,
}

/// How hosts render results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Defaults applied when a host request leaves a choice open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverPrefs {
    /// Engine to run.
    pub algorithm: AlgorithmChoice,
    /// Seed node for Prim.
    pub start_node: NodeId,
    /// Output rendering.
    pub output: OutputFormat,
}

impl SolverPrefs {
    /// Concrete engine request for these prefs.
    pub fn algorithm(&self) -> Algorithm {
        match self.algorithm {
            AlgorithmChoice::Prim => Algorithm::Prim {
                start: self.start_node,
            },
            AlgorithmChoice::Kruskal => Algorithm::Kruskal,
            AlgorithmChoice::Boruvka => Algorithm::Boruvka,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let prefs: SolverPrefs = serde_json::from_str(r#"{"algorithm":"prim"}"#).unwrap();
        assert_eq!(prefs.algorithm(), Algorithm::Prim { start: 0 });
        assert_eq!(prefs.output, OutputFormat::Text);
    }

    #[test]
    fn default_is_kruskal() {
        assert_eq!(SolverPrefs::default().algorithm(), Algorithm::Kruskal);
    }
}
