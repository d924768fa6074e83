// Copyright (c) 2026 Adrian Robinson. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.

use proptest::prelude::*;
use proptest::sample::Index;
use std::fmt::Debug;
#[cfg(feature = "parallel")]
use unique_latch::ReduceOptions;
use unique_latch::{unique_optional, Finisher, Latch, Optional, Strict, UniqueIteratorExt};

// ============================================================================
// Strategies
// ============================================================================

fn arb_latch<S>(values: S) -> impl Strategy<Value = Latch<S::Value>>
where
    S: Strategy + 'static,
    S::Value: Clone + Debug,
{
    prop_oneof![
        Just(Latch::Empty),
        values.prop_map(Latch::Single),
        Just(Latch::Conflict),
    ]
}

fn arb_partitions() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..3), 0..8)
}

fn arb_picks() -> impl Strategy<Value = Vec<(Index, Index, bool)>> {
    prop::collection::vec((any::<Index>(), any::<Index>(), any::<bool>()), 1..16)
}

/// Merges latches in an arbitrary tree: repeatedly takes two latches from
/// positions chosen by `picks` and puts their merge back.
fn merge_by_picks<T>(mut latches: Vec<Latch<T>>, picks: &[(Index, Index, bool)]) -> Latch<T> {
    let mut picks = picks.iter().cycle();
    while latches.len() > 1 {
        let (i, j, swap) = match picks.next() {
            Some(pick) => pick,
            None => break,
        };
        let a = latches.swap_remove(i.index(latches.len()));
        let b = latches.swap_remove(j.index(latches.len()));
        latches.push(if *swap { b.merge(a) } else { a.merge(b) });
    }
    latches.pop().unwrap_or_default()
}

// ============================================================================
// Property Macros
// ============================================================================

macro_rules! test_properties {
    ($name:ident, $arb:expr) => {
        paste::paste! {
            proptest! {
                #[test]
                fn [< $name _identity >](a in $arb) {
                    prop_assert_eq!(Latch::Empty.merge(a.clone()), a.clone());
                    prop_assert_eq!(a.clone().merge(Latch::Empty), a);
                }

                #[test]
                fn [< $name _commutativity >](a in $arb, b in $arb) {
                    let ab = a.clone().merge(b.clone());
                    let ba = b.merge(a);
                    prop_assert_eq!(ab, ba);
                }

                #[test]
                fn [< $name _associativity >](a in $arb, b in $arb, c in $arb) {
                    let ab_c = a.clone().merge(b.clone()).merge(c.clone());
                    let a_bc = a.clone().merge(b.clone().merge(c.clone()));
                    let ac_b = a.merge(c).merge(b);

                    prop_assert_eq!(&ab_c, &a_bc);
                    prop_assert_eq!(&ab_c, &ac_b);
                }

                #[test]
                fn [< $name _both_non_empty_conflicts >](a in $arb, b in $arb) {
                    prop_assume!(!a.is_empty() && !b.is_empty());
                    prop_assert!(a.merge(b).is_conflict());
                }

                #[test]
                fn [< $name _self_merge_counts_twice >](a in $arb) {
                    prop_assume!(!a.is_empty());
                    prop_assert!(a.clone().merge(a).is_conflict());
                }

                #[test]
                fn [< $name _cardinality_combines >](a in $arb, b in $arb) {
                    let expected = a.cardinality().combine(b.cardinality());
                    prop_assert_eq!(a.merge(b).cardinality(), expected);
                }
            }
        }
    };
}

// ============================================================================
// Tests
// ============================================================================

test_properties!(latch_u8, arb_latch(any::<u8>()));
test_properties!(latch_string, arb_latch("[a-z]{1,3}"));

// Partition Invariance
proptest! {
    #[test]
    fn finish_depends_only_on_total_count(partitions in arb_partitions(), picks in arb_picks()) {
        let all: Vec<u8> = partitions.iter().flatten().copied().collect();
        let latches: Vec<Latch<u8>> = partitions
            .iter()
            .map(|partition| partition.iter().copied().collect())
            .collect();

        let merged = merge_by_picks(latches, &picks);

        match all.as_slice() {
            [only] => {
                prop_assert_eq!(Optional::finish(merged.clone()), Some(*only));
                prop_assert_eq!(Strict::finish(merged).unwrap(), *only);
            }
            _ => {
                prop_assert_eq!(Optional::finish(merged.clone()), None);
                prop_assert!(Strict::finish(merged).unwrap_err().is_no_unique_element());
            }
        }
    }

    #[test]
    fn singleton_partitions_never_unique(values in prop::collection::vec(any::<u8>(), 2..10), picks in arb_picks()) {
        // Every partition sees at most one element; multiplicity only shows at merge time.
        let latches: Vec<Latch<u8>> = values.into_iter().map(Latch::Single).collect();
        prop_assert!(merge_by_picks(latches, &picks).is_conflict());
    }

    #[test]
    fn reducer_matches_iterator(partitions in arb_partitions()) {
        let all: Vec<u8> = partitions.iter().flatten().copied().collect();
        let expected = all.iter().copied().single_opt();
        prop_assert_eq!(unique_optional::<u8>().reduce_partitions(partitions), expected);
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn reduce_slice_matches_sequential(
        values in prop::collection::vec(any::<u8>(), 0..64),
        partition_size in 1usize..8,
        max_threads in 1usize..6,
    ) {
        let options = ReduceOptions::new()
            .with_partition_size(partition_size)
            .with_max_threads(max_threads);
        let expected = unique_optional::<u8>().reduce(values.iter().copied());
        prop_assert_eq!(unique_optional::<u8>().reduce_slice(&values, &options), expected);
    }
}
