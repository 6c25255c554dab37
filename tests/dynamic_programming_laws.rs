#![cfg(feature = "dynamic_programming")]
//! Property-based tests for the dynamic programming algorithms.
//!
//! Small inputs are checked against exhaustive search or simple invariants
//! that any correct answer must satisfy.

use ordkit::dynamic_programming::{Item, knapsack, longest_common_subsequence, min_edit_distance};
use proptest::prelude::*;

fn item_strategy() -> impl Strategy<Value = Item> {
    (0..50_u64, 0..12_usize).prop_map(|(value, weight)| Item::new(value, weight))
}

/// Best total value over every subset that fits.
fn brute_force_best(capacity: usize, items: &[Item]) -> u64 {
    (0_u32..1 << items.len())
        .filter_map(|mask| {
            let chosen = items
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, item)| item);
            let (value, weight) = chosen.fold((0, 0), |(value, weight), item| {
                (value + item.value, weight + item.weight)
            });
            (weight <= capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}

fn is_subsequence<T: PartialEq>(candidate: &[T], sequence: &[T]) -> bool {
    let mut remaining = sequence.iter();
    candidate
        .iter()
        .all(|wanted| remaining.any(|element| element == wanted))
}

// =============================================================================
// Knapsack Optimality Law
// Description: The selection fits and matches the best value found by brute force
// =============================================================================

proptest! {
    #[test]
    fn prop_knapsack_optimality_law(
        capacity in 0..30_usize,
        items in prop::collection::vec(item_strategy(), 0..10)
    ) {
        let selection = knapsack(capacity, &items).unwrap();

        prop_assert!(selection.total_weight() <= capacity);
        prop_assert_eq!(selection.total_value(), brute_force_best(capacity, &items));

        let summed: u64 = selection.items().iter().map(|item| item.value).sum();
        prop_assert_eq!(summed, selection.total_value());

        for (&index, item) in selection.indices().iter().zip(selection.items()) {
            prop_assert_eq!(items[index], *item);
        }
        prop_assert!(selection.indices().windows(2).all(|pair| pair[0] < pair[1]));
    }
}

// =============================================================================
// Longest Common Subsequence Law
// Description: The result is a subsequence of both inputs and is symmetric in length
// =============================================================================

proptest! {
    #[test]
    fn prop_lcs_is_common_subsequence(
        first in prop::collection::vec(0..4_u8, 0..30),
        second in prop::collection::vec(0..4_u8, 0..30)
    ) {
        let common = longest_common_subsequence(&first, &second);

        prop_assert!(is_subsequence(&common, &first));
        prop_assert!(is_subsequence(&common, &second));
        prop_assert!(common.len() <= first.len().min(second.len()));
        prop_assert_eq!(
            common.len(),
            longest_common_subsequence(&second, &first).len()
        );
    }

    #[test]
    fn prop_lcs_of_self_is_identity(sequence in prop::collection::vec(any::<u8>(), 0..40)) {
        prop_assert_eq!(longest_common_subsequence(&sequence, &sequence), sequence);
    }
}

// =============================================================================
// Edit Distance Metric Law
// Description: Distance is symmetric, zero exactly on equal inputs, and bounded
// =============================================================================

proptest! {
    #[test]
    fn prop_edit_distance_metric_law(
        source in prop::collection::vec(0..4_u8, 0..30),
        target in prop::collection::vec(0..4_u8, 0..30)
    ) {
        let distance = min_edit_distance(&source, &target);

        prop_assert_eq!(distance, min_edit_distance(&target, &source));
        prop_assert_eq!(distance == 0, source == target);
        prop_assert!(distance <= source.len().max(target.len()));
        prop_assert!(distance >= source.len().abs_diff(target.len()));
    }

    #[test]
    fn prop_edit_distance_triangle_law(
        first in prop::collection::vec(0..3_u8, 0..15),
        second in prop::collection::vec(0..3_u8, 0..15),
        third in prop::collection::vec(0..3_u8, 0..15)
    ) {
        prop_assert!(
            min_edit_distance(&first, &third)
                <= min_edit_distance(&first, &second) + min_edit_distance(&second, &third)
        );
    }
}
