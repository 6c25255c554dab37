//! Comparison sorts.
//!
//! - [`merge_sort`] / [`merge_sort_by`]: stable, returns a sorted copy
//! - [`quick_sort`] / [`quick_sort_by`]: in place, first-element pivot
//! - [`quick_sorted`]: quicksort into a sorted copy
//!
//! Both algorithms are total: every finite input, including empty and
//! single-element slices, yields a sorted permutation of itself.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::sorting::{merge_sort, quick_sort};
//!
//! let input = [9, 3, 7, 1];
//!
//! let merged = merge_sort(&input);
//! let mut quick = input;
//! quick_sort(&mut quick);
//!
//! assert_eq!(merged, vec![1, 3, 7, 9]);
//! assert_eq!(quick, [1, 3, 7, 9]);
//! ```

mod merge_sort;
mod quick_sort;

pub use merge_sort::merge_sort;
pub use merge_sort::merge_sort_by;
pub use quick_sort::quick_sort;
pub use quick_sort::quick_sort_by;
pub use quick_sort::quick_sorted;
