// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Union-find over `[0, n)` with path compression and union by rank.
use crate::steps::StepCounter;

/// Disjoint-set forest over the index space `[0, n)`.
///
/// Both operations are iterative, so stack depth stays constant regardless of
/// how degenerate the forest gets before compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, charging one step per element.
    pub fn new(n: usize, steps: &mut StepCounter) -> Self {
        let mut parent = Vec::with_capacity(n);
        for i in 0..n {
            parent.push(i);
            steps.tick();
        }
        Self {
            parent,
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements in the index space.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the index space is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node visited on the way up is rewired directly to the root.
    /// `x` must lie in `[0, len())`; an index outside it panics.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Returns `true` when `x` and `y` share a representative.
    ///
    /// Same index precondition as [`DisjointSet::find`].
    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the sets of `x` and `y`; returns `false` if they were already one.
    ///
    /// The lower-rank root goes under the higher-rank root. On equal rank,
    /// `y`'s root goes under `x`'s root and the survivor's rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.components -= 1;
        true
    }
}
