// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-run step counter.

/// Counts comparison/assignment-heavy operations performed by one engine run.
///
/// Each engine starts from [`StepCounter::new`] and threads the counter by
/// `&mut` through the sort utility and the disjoint set, so two runs never
/// share a tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepCounter(u64);

impl StepCounter {
    /// A counter at zero.
    pub fn new() -> Self {
        Self(0)
    }

    /// Charges one step.
    #[inline]
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    /// Charges `n` steps at once.
    #[inline]
    pub fn add(&mut self, n: u64) {
        self.0 += n;
    }

    /// Steps charged so far.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for StepCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
