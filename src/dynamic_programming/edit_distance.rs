//! Minimum edit distance (Levenshtein distance) by bottom-up tabulation.
//!
//! Counts the fewest single-element insertions, removals and replacements
//! that turn one sequence into another. Every operation costs 1.
//!
//! Row `i` of the conceptual table holds the distances from the first `i`
//! source elements to every prefix of the target. Only the previous row is
//! needed to fill the next, so two rows are kept and swapped.
//!
//! # Complexity
//!
//! O(|source| · |target|) time, O(|target|) space.

use std::mem;

/// Returns the minimum number of unit-cost edits turning `source` into
/// `target`.
///
/// # Examples
///
/// ```rust
/// use ordkit::dynamic_programming::min_edit_distance;
///
/// assert_eq!(min_edit_distance(&[1, 2, 3], &[1, 3]), 1);
/// assert_eq!(min_edit_distance::<u8>(&[], &[7, 7]), 2);
/// ```
#[must_use]
pub fn min_edit_distance<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0_usize; target.len() + 1];

    for (row, source_element) in source.iter().enumerate() {
        current[0] = row + 1;
        for (column, target_element) in target.iter().enumerate() {
            current[column + 1] = if source_element == target_element {
                previous[column]
            } else {
                let replace = previous[column];
                let remove = previous[column + 1];
                let insert = current[column];
                1 + replace.min(remove).min(insert)
            };
        }
        mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}

/// Returns the minimum edit distance between two strings, compared by `char`.
///
/// # Examples
///
/// ```rust
/// use ordkit::dynamic_programming::min_edit_distance_str;
///
/// assert_eq!(min_edit_distance_str("sunday", "saturday"), 3);
/// assert_eq!(min_edit_distance_str("", "abc"), 3);
/// ```
#[must_use]
pub fn min_edit_distance_str(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    min_edit_distance(&source, &target)
}
