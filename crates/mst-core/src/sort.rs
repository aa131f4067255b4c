// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Step-counted stable insertion sort.
use std::cmp::Ordering;

use crate::steps::StepCounter;

/// Sorts `items` in place, ascending under `compare`.
///
/// Stable: an element only moves past a predecessor when
/// `compare(predecessor, element)` is [`Ordering::Greater`], so ties keep
/// their input order. Charges one step per element shift and one per
/// placement of the element being inserted.
///
/// Deliberately quadratic; the step count of Prim and Kruskal depends on it.
pub fn insertion_sort<T, F>(items: &mut [T], steps: &mut StepCounter, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            // Adjacent swaps keep `items[j]` as the element being inserted.
            items.swap(j - 1, j);
            j -= 1;
            steps.tick();
        }
        steps.tick();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;

    #[test]
    fn sorts_ascending() {
        let mut steps = StepCounter::new();
        let mut v = vec![5, 1, 4, 2, 3];
        insertion_sort(&mut v, &mut steps, Ord::cmp);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn keeps_ties_in_input_order() {
        let mut steps = StepCounter::new();
        let mut v = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort(&mut v, &mut steps, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn charges_shifts_and_placements() {
        // Already sorted: one placement per outer iteration, no shifts.
        let mut steps = StepCounter::new();
        let mut v = vec![1, 2, 3, 4];
        insertion_sort(&mut v, &mut steps, Ord::cmp);
        assert_eq!(steps.get(), 3);

        // Reversed: 3 placements + (1 + 2 + 3) shifts.
        let mut steps = StepCounter::new();
        let mut v = vec![4, 3, 2, 1];
        insertion_sort(&mut v, &mut steps, Ord::cmp);
        assert_eq!(steps.get(), 9);
    }

    #[test]
    fn empty_and_single_cost_nothing() {
        let mut steps = StepCounter::new();
        let mut empty: Vec<i32> = Vec::new();
        insertion_sort(&mut empty, &mut steps, Ord::cmp);
        let mut one = vec![7];
        insertion_sort(&mut one, &mut steps, Ord::cmp);
        assert_eq!(steps.get(), 0);
        assert_eq!(one, vec![7]);
    }
}
