//! In-place quicksort with a first-element pivot.
//!
//! Each sub-range is partitioned around its first element. Elements strictly
//! less than the pivot end up on its left, everything else on its right.
//!
//! # Complexity
//!
//! | Measure         | Average      | Worst        |
//! |-----------------|--------------|--------------|
//! | Time            | O(n log n)   | O(n²)        |
//! | Recursion depth | O(log n)     | O(log n)     |
//!
//! The worst case is hit by already sorted or reverse sorted input, since the
//! pivot is never randomized. Recursion always goes into the smaller partition
//! and the larger one is handled by the loop, which keeps the stack shallow
//! even then.
//!
//! The sort is not stable.

use std::cmp::Ordering;

/// Sorts `elements` in place.
///
/// # Examples
///
/// ```rust
/// use ordkit::sorting::quick_sort;
///
/// let mut numbers = [0, 1, 5, -20, 3, 66, 2, 9, 7, 22, 11, -33, 100];
/// quick_sort(&mut numbers);
/// assert_eq!(numbers, [-33, -20, 0, 1, 2, 3, 5, 7, 9, 11, 22, 66, 100]);
/// ```
pub fn quick_sort<T: Ord>(elements: &mut [T]) {
    quick_sort_by(elements, T::cmp);
}

/// Sorts `elements` in place with the comparator `compare`.
///
/// # Examples
///
/// ```rust
/// use ordkit::sorting::quick_sort_by;
///
/// let mut words = ["kiwi", "fig", "banana"];
/// quick_sort_by(&mut words, |left, right| left.len().cmp(&right.len()));
/// assert_eq!(words, ["fig", "kiwi", "banana"]);
/// ```
pub fn quick_sort_by<T, F>(elements: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    tracing::trace!(length = elements.len(), "quick_sort");
    sort_range(elements, &mut compare);
}

/// Returns a sorted copy of `elements`, leaving the input untouched.
///
/// # Examples
///
/// ```rust
/// use ordkit::sorting::quick_sorted;
///
/// let input = vec![3, 1, 2];
/// assert_eq!(quick_sorted(&input), vec![1, 2, 3]);
/// assert_eq!(input, vec![3, 1, 2]);
/// ```
#[must_use]
pub fn quick_sorted<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    let mut sorted = elements.to_vec();
    quick_sort(&mut sorted);
    sorted
}

fn sort_range<T, F>(elements: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut remaining = elements;
    while remaining.len() > 1 {
        let pivot = partition(remaining, compare);
        let (left, right) = std::mem::take(&mut remaining).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            sort_range(left, compare);
            remaining = right;
        } else {
            sort_range(right, compare);
            remaining = left;
        }
    }
}

/// Partitions around `elements[0]` and returns the pivot's final index.
///
/// Each element smaller than the pivot is swapped into the slot just right of
/// the pivot, then the pivot steps over it.
fn partition<T, F>(elements: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pivot = 0;
    for index in 1..elements.len() {
        if compare(&elements[index], &elements[pivot]) == Ordering::Less {
            elements.swap(pivot + 1, index);
            elements.swap(pivot, pivot + 1);
            pivot += 1;
        }
    }
    pivot
}
