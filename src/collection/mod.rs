//! Insertion-ordered collections.
//!
//! - [`OrderedSet`]: a set that remembers insertion order, with O(1) average
//!   membership tests backed by a value-keyed hash index
//!
//! # Examples
//!
//! ```rust
//! use ordkit::collection::OrderedSet;
//! use ordkit::ordered_set;
//!
//! let mut set: OrderedSet<&str> = ordered_set!["hello", "world", "its", "me"];
//! assert!(set.contains("its"));
//! assert!(!set.contains("nothing"));
//!
//! // Duplicates are ignored and keep their first position
//! assert!(!set.append("hello"));
//!
//! // Removal keeps the remaining elements in order
//! set.remove("world").unwrap();
//! let remaining: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(remaining, vec!["hello", "its", "me"]);
//!
//! // `map` produces a plain vector, the set itself is untouched
//! let shouted = set.map(|element| format!("{element}!"));
//! assert_eq!(shouted, vec!["hello!", "its!", "me!"]);
//! ```
//!
//! # Hashing
//!
//! The hasher used by [`OrderedSet::new`] is [`DefaultHashBuilder`], chosen at
//! compile time:
//!
//! | Feature  | `DefaultHashBuilder`                          |
//! |----------|-----------------------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`                   |
//! | `ahash`  | `ahash::RandomState` (when `fxhash` is off)   |
//! | neither  | `std::collections::hash_map::RandomState`     |
//!
//! Any other [`BuildHasher`](std::hash::BuildHasher) can be supplied through
//! [`OrderedSet::with_hasher`].

// =============================================================================
// Hash Builder Selection
// =============================================================================

/// Hash builder used by [`OrderedSet`] when no hasher is given.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`OrderedSet`] when no hasher is given.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`OrderedSet`] when no hasher is given.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod ordered_set;
mod ordered_set_macro;

pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;
