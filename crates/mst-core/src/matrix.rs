// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dense symmetric adjacency weight matrix.
use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// `n × n` weight matrix, row-major.
///
/// A cell holds the weight of the edge joining its row and column nodes, or
/// `0` when no edge exists. A genuine zero-weight edge is indistinguishable
/// from a missing one here; consult the edge list when that matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMatrix {
    size: usize,
    cells: Vec<Weight>,
}

impl WeightMatrix {
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, weight: Weight) {
        self.cells[i * self.size + j] = weight;
        self.cells[j * self.size + i] = weight;
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell `[i][j]`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<Weight> {
        (i < self.size && j < self.size).then(|| self.cells[i * self.size + j])
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // `chunks(0)` panics; an empty matrix simply has no rows.
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Returns `true` when `[i][j] == [j][i]` for every cell.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size).all(|j| self.cells[i * self.size + j] == self.cells[j * self.size + i])
        })
    }

    /// Copies the matrix into nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(<[Weight]>::to_vec).collect()
    }
}
