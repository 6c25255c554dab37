//! Dynamic-programming algorithms solved by bottom-up tabulation.
//!
//! - [`knapsack`]: 0/1 knapsack, value-maximizing subset under a weight bound
//! - [`longest_common_subsequence`] / [`longest_common_subsequence_str`]
//! - [`min_edit_distance`] / [`min_edit_distance_str`]: unit-cost Levenshtein
//!   distance
//!
//! Each routine fills its table smallest subproblem first, with no
//! recursion, so input size alone bounds the stack.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::dynamic_programming::{
//!     Item, knapsack, longest_common_subsequence_str, min_edit_distance_str,
//! };
//!
//! let items = [Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)];
//! assert_eq!(knapsack(50, &items).unwrap().total_value(), 220);
//!
//! assert_eq!(longest_common_subsequence_str("AGGTAB", "GXTXAYB"), "GTAB");
//! assert_eq!(min_edit_distance_str("sunday", "saturday"), 3);
//! ```

mod edit_distance;
mod knapsack;
mod longest_common_subsequence;

pub use edit_distance::min_edit_distance;
pub use edit_distance::min_edit_distance_str;
pub use knapsack::Item;
pub use knapsack::Selection;
pub use knapsack::knapsack;
pub use longest_common_subsequence::longest_common_subsequence;
pub use longest_common_subsequence::longest_common_subsequence_str;
