//! Longest common subsequence by bottom-up tabulation.
//!
//! A subsequence keeps the relative order of its elements but need not be
//! contiguous: "ACE" is a subsequence of "ABCDE".
//!
//! The table entry at `(i, j)` is the LCS length of the first `i` elements of
//! one input and the first `j` of the other. The subsequence itself is read
//! off by walking back from the bottom-right corner.
//!
//! When two shorter answers tie on length, the walk trims the second input.
//! Different inputs can have several longest common subsequences; this rule
//! fixes which one is returned.
//!
//! # Complexity
//!
//! O(|a| · |b|) time and space.

/// Returns a longest common subsequence of `first` and `second`.
///
/// # Examples
///
/// ```rust
/// use ordkit::dynamic_programming::longest_common_subsequence;
///
/// let first = [1, 3, 4, 1, 2, 3];
/// let second = [3, 4, 1, 2, 1, 3];
/// assert_eq!(longest_common_subsequence(&first, &second), vec![3, 4, 1, 2, 3]);
/// ```
#[must_use]
pub fn longest_common_subsequence<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let columns = second.len() + 1;
    let lengths = tabulate(first, second);
    let length_at = |row: usize, column: usize| lengths[row * columns + column];

    let mut subsequence = Vec::with_capacity(length_at(first.len(), second.len()));
    let (mut row, mut column) = (first.len(), second.len());
    while row > 0 && column > 0 {
        if first[row - 1] == second[column - 1] {
            subsequence.push(first[row - 1].clone());
            row -= 1;
            column -= 1;
        } else if length_at(row - 1, column) > length_at(row, column - 1) {
            row -= 1;
        } else {
            column -= 1;
        }
    }
    subsequence.reverse();
    subsequence
}

/// Returns a longest common subsequence of two strings, compared by `char`.
///
/// # Examples
///
/// ```rust
/// use ordkit::dynamic_programming::longest_common_subsequence_str;
///
/// assert_eq!(longest_common_subsequence_str("AGGTAB", "GXTXAYB"), "GTAB");
/// assert_eq!(longest_common_subsequence_str("ABCDGH", "AEDFHR"), "ADH");
/// ```
#[must_use]
pub fn longest_common_subsequence_str(first: &str, second: &str) -> String {
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();
    longest_common_subsequence(&first, &second)
        .into_iter()
        .collect()
}

/// Builds the row-major `(|first| + 1) × (|second| + 1)` table of LCS lengths.
fn tabulate<T: PartialEq>(first: &[T], second: &[T]) -> Vec<usize> {
    let columns = second.len() + 1;
    let mut lengths = vec![0_usize; (first.len() + 1) * columns];

    for (row, first_element) in (1..).zip(first) {
        for (column, second_element) in (1..).zip(second) {
            let cell = row * columns + column;
            lengths[cell] = if first_element == second_element {
                lengths[cell - columns - 1] + 1
            } else {
                lengths[cell - columns].max(lengths[cell - 1])
            };
        }
    }

    lengths
}
