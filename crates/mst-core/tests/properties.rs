// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
use proptest::prelude::*;

use mst_core::{
    boruvka_mst, insertion_sort, kruskal_mst, prim_mst, DisjointSet, Graph, StepCounter,
};

/// Connected graph on `n` nodes with distinct weights: a random spanning
/// chain plus extra random chords. Weights come from a shuffled range so no
/// two edges tie.
fn connected_graph() -> impl Strategy<Value = Graph> {
    (2usize..9)
        .prop_flat_map(|n| {
            let parents = proptest::collection::vec(any::<prop::sample::Index>(), n - 1);
            let chords = proptest::collection::vec((0..n, 0..n), 0..(2 * n));
            (Just(n), parents, chords, any::<u64>())
        })
        .prop_map(|(n, parents, chords, salt)| {
            let mut g = Graph::new();
            for i in 0..n {
                g.add_node(i as f64, 0.0);
            }
            let mut next_weight = -1000 + i64::try_from(salt % 500).unwrap_or(0);
            // Node i attaches to some earlier node, so the chain spans.
            for (i, parent) in parents.iter().enumerate() {
                let child = i + 1;
                let p = parent.index(child);
                if g.add_edge(p, child, next_weight).is_ok() {
                    next_weight += 3;
                }
            }
            for (a, b) in chords {
                if g.add_edge(a, b, next_weight).is_ok() {
                    next_weight += 3;
                }
            }
            g
        })
}

proptest! {
    #[test]
    fn engines_agree_on_total_weight(g in connected_graph()) {
        prop_assume!(g.edge_count() >= 2);
        let kruskal = kruskal_mst(&g);
        let boruvka = boruvka_mst(&g).expect("connected graph never stalls");
        prop_assert!(kruskal.is_spanning_tree_of(&g));
        prop_assert!(boruvka.is_spanning_tree_of(&g));
        prop_assert_eq!(kruskal.total_weight(), boruvka.total_weight());
        for start in 0..g.node_count() {
            let prim = prim_mst(&g, start).expect("connected graph has a tree");
            prop_assert!(prim.is_spanning_tree_of(&g));
            prop_assert_eq!(prim.total_weight(), kruskal.total_weight());
        }
    }

    #[test]
    fn engines_are_deterministic(g in connected_graph()) {
        prop_assume!(g.edge_count() >= 2);
        prop_assert_eq!(kruskal_mst(&g), kruskal_mst(&g));
        prop_assert_eq!(boruvka_mst(&g), boruvka_mst(&g));
        prop_assert_eq!(prim_mst(&g, 0), prim_mst(&g, 0));
    }

    #[test]
    fn insertion_sort_is_a_stable_permutation(keys in proptest::collection::vec(0u8..6, 0..40)) {
        let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let mut sorted = tagged.clone();
        let mut steps = StepCounter::new();
        insertion_sort(&mut sorted, &mut steps, |a, b| a.0.cmp(&b.0));

        let mut expected = tagged;
        expected.sort_by_key(|t| t.0); // std sort is stable too
        prop_assert_eq!(&sorted, &expected);
        prop_assert!(sorted.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn disjoint_set_laws(n in 1usize..30, ops in proptest::collection::vec((0usize..30, 0usize..30), 0..60)) {
        let mut steps = StepCounter::new();
        let mut sets = DisjointSet::new(n, &mut steps);
        for (a, b) in ops {
            let (a, b) = (a % n, b % n);
            sets.union(a, b);
            prop_assert_eq!(sets.find(a), sets.find(b));
        }
        let mut roots = std::collections::BTreeSet::new();
        for x in 0..n {
            let r = sets.find(x);
            prop_assert_eq!(sets.find(r), r);
            prop_assert_eq!(sets.find(x), r);
            roots.insert(r);
        }
        prop_assert_eq!(roots.len(), sets.components());
    }

    #[test]
    fn node_removal_renumbers(g in connected_graph(), victim in any::<prop::sample::Index>()) {
        let n = g.node_count();
        let k = victim.index(n);
        let survivors: Vec<(usize, usize, i32)> = g
            .edges()
            .iter()
            .filter(|e| !e.touches(k))
            .map(|e| {
                let shift = |v: usize| if v > k { v - 1 } else { v };
                (shift(e.node1), shift(e.node2), e.weight)
            })
            .collect();

        let mut g = g;
        g.remove_node(k);
        let ids: Vec<_> = g.nodes().iter().map(|node| node.id).collect();
        prop_assert_eq!(ids, (0..n - 1).collect::<Vec<_>>());
        let after: Vec<_> = g.edges().iter().map(|e| (e.node1, e.node2, e.weight)).collect();
        prop_assert_eq!(after, survivors);
        for (i, e) in g.edges().iter().enumerate() {
            prop_assert_eq!(e.id, i);
        }
    }
}
