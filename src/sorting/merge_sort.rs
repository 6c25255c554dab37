//! Stable top-down merge sort.
//!
//! # Complexity
//!
//! | Measure         | Bound        |
//! |-----------------|--------------|
//! | Time            | O(n log n)   |
//! | Auxiliary space | O(n)         |
//! | Recursion depth | O(log n)     |
//!
//! One scratch buffer of the input's length is allocated up front and reused
//! by every merge, so no level of the recursion allocates.

use std::cmp::Ordering;

/// Returns a sorted copy of `elements`. The input is left untouched.
///
/// The sort is stable: elements that compare equal keep their input order.
///
/// # Examples
///
/// ```rust
/// use ordkit::sorting::merge_sort;
///
/// let sorted = merge_sort(&[0, 43, 2, 5, 2, 4, 7, 4, 9, -10]);
/// assert_eq!(sorted, vec![-10, 0, 2, 2, 4, 4, 5, 7, 9, 43]);
///
/// assert_eq!(merge_sort::<i32>(&[]), Vec::<i32>::new());
/// assert_eq!(merge_sort(&[5]), vec![5]);
/// ```
#[must_use]
pub fn merge_sort<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
    merge_sort_by(elements, T::cmp)
}

/// Returns a copy of `elements` sorted with the comparator `compare`.
///
/// Stable like [`merge_sort`]. On a tie the element from the left half is
/// taken first.
///
/// # Examples
///
/// ```rust
/// use ordkit::sorting::merge_sort_by;
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// let by_length = merge_sort_by(&words, |left, right| left.len().cmp(&right.len()));
/// // "pear" and "kiwi" tie on length and keep their input order
/// assert_eq!(by_length, vec!["fig", "pear", "kiwi", "apple"]);
/// ```
#[must_use]
pub fn merge_sort_by<T, F>(elements: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();
    if sorted.len() <= 1 {
        return sorted;
    }

    tracing::trace!(length = sorted.len(), "merge_sort");
    let mut scratch = sorted.clone();
    sort_range(&mut sorted, &mut scratch, &mut compare);
    sorted
}

/// Sorts `elements` in place, using the equally long `scratch` as merge space.
fn sort_range<T, F>(elements: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let length = elements.len();
    if length <= 1 {
        return;
    }

    let middle = length / 2;
    {
        let (left, right) = elements.split_at_mut(middle);
        let (left_scratch, right_scratch) = scratch.split_at_mut(middle);
        sort_range(left, left_scratch, compare);
        sort_range(right, right_scratch, compare);
    }

    let (left, right) = elements.split_at(middle);
    merge_into(left, right, scratch, compare);
    elements.clone_from_slice(scratch);
}

/// Merges two sorted runs into `output`, whose length is the sum of both.
///
/// The right head is taken only when it is strictly less than the left head.
fn merge_into<T, F>(left: &[T], right: &[T], output: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert_eq!(left.len() + right.len(), output.len());

    let mut left_index = 0;
    let mut right_index = 0;

    for slot in output.iter_mut() {
        let take_left = match (left.get(left_index), right.get(right_index)) {
            (Some(left_head), Some(right_head)) => {
                compare(right_head, left_head) != Ordering::Less
            }
            (Some(_), None) => true,
            (None, _) => false,
        };

        if take_left {
            slot.clone_from(&left[left_index]);
            left_index += 1;
        } else {
            slot.clone_from(&right[right_index]);
            right_index += 1;
        }
    }
}
