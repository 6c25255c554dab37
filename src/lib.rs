//! # ordkit
//!
//! An insertion-ordered hash set and a small set of classic algorithms.
//!
//! ## Overview
//!
//! - **Collections**: [`OrderedSet`](collection::OrderedSet), a set that keeps
//!   insertion order with O(1) average membership tests
//! - **Sorting**: stable merge sort and first-pivot quicksort
//! - **Dynamic Programming**: 0/1 knapsack, longest common subsequence, and
//!   minimum edit distance
//!
//! Fallible operations return [`Result`] with an [`Error`]. Diagnostics are
//! emitted through `tracing`; the library never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `collection`: [`OrderedSet`](collection::OrderedSet) and `ordered_set!`
//! - `sorting`: sorting algorithms
//! - `dynamic_programming`: knapsack, LCS, edit distance
//! - `serde`: `Serialize`/`Deserialize` for the public data types
//! - `fxhash`: hash with `rustc-hash` by default
//! - `ahash`: hash with `ahash` by default
//! - `full`: every module plus `serde`
//!
//! ## Example
//!
//! ```rust
//! use ordkit::prelude::*;
//!
//! let mut set = ordered_set!["hello", "world"];
//! set.append("again");
//! assert!(set.contains("world"));
//!
//! let sorted = merge_sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//!
//! assert_eq!(min_edit_distance_str("kitten", "sitting"), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions, and macros.
///
/// # Usage
///
/// ```rust
/// use ordkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::Error;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::ordered_set;

    #[cfg(feature = "sorting")]
    pub use crate::sorting::*;

    #[cfg(feature = "dynamic_programming")]
    pub use crate::dynamic_programming::*;
}

mod error;

pub use error::{Error, Result};

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "sorting")]
pub mod sorting;

#[cfg(feature = "dynamic_programming")]
pub mod dynamic_programming;
