//! Insertion-ordered set with hash-indexed membership.
//!
//! This module provides [`OrderedSet`], a collection of distinct elements that
//! iterates in the order the elements were first added.
//!
//! # Overview
//!
//! `OrderedSet` keeps two stores in lockstep:
//! - a dense `Vec<T>` holding the elements in insertion order
//! - a `HashMap<T, usize>` from each element to its position in that `Vec`
//!
//! The map is keyed by the element itself, so two unequal elements that share
//! a hash value are still told apart by `Eq`.
//!
//! # Invariants
//!
//! After every public method returns:
//! - every element at position `p` maps to `p` in the index
//! - the `Vec` holds no duplicates
//! - the index has exactly one entry per element
//!
//! Debug builds assert these after every mutation.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity          |
//! |----------------|---------------------|
//! | `append`       | O(1) amortized      |
//! | `contains`     | O(1) average        |
//! | `index_of`     | O(1) average        |
//! | `get`          | O(1)                |
//! | `remove`       | O(n)                |
//! | `remove_index` | O(n)                |
//! | `retain`       | O(n)                |
//! | `iter`         | O(1) + O(n)         |
//! | `map`          | O(n)                |
//!
//! `remove` is linear because every element after the removed one moves one
//! slot to the left and gets its index entry rewritten.
//!
//! # Examples
//!
//! ```rust
//! use ordkit::collection::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! assert!(set.append(3));
//! assert!(set.append(1));
//! assert!(set.append(2));
//! assert!(!set.append(1)); // already present
//!
//! let elements: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(elements, vec![3, 1, 2]);
//!
//! assert_eq!(set.remove(&1), Ok(1));
//! assert_eq!(set.index_of(&2), Some(1));
//! assert!(set.remove(&1).unwrap_err().is_not_found());
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::Index;

use super::DefaultHashBuilder;
use crate::error::{Error, Result};

/// An insertion-ordered collection of distinct elements.
///
/// # Type Parameters
///
/// * `T` - The element type. Hashing operations need `Eq + Hash + Clone`;
///   one copy lives in the ordered store and one keys the index.
/// * `S` - The hash builder, [`DefaultHashBuilder`] unless specified.
///
/// # Examples
///
/// ```rust
/// use ordkit::collection::OrderedSet;
///
/// let set: OrderedSet<String> = ["b", "a", "c"].into_iter().map(String::from).collect();
/// assert!(set.contains("a"));
/// assert_eq!(set.first().map(String::as_str), Some("b"));
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, S = DefaultHashBuilder> {
    elements: Vec<T>,
    positions: HashMap<T, usize, S>,
}

impl<T> OrderedSet<T> {
    /// Creates a new empty set using [`DefaultHashBuilder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Creates an empty set that hashes with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = OrderedSet::with_hasher(RandomState::new());
    /// set.append("x");
    /// assert!(set.contains("x"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            elements: Vec::new(),
            positions: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with room for `capacity` elements that hashes with
    /// `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index` in insertion order.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the oldest element still in the set.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the most recently appended element still in the set.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the elements as a slice in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.positions.hasher()
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// Every call starts a fresh iteration at the first element, and any
    /// number of iterators can walk the same set at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into();
    /// let mut first = set.iter();
    /// let mut second = set.iter();
    ///
    /// assert_eq!(first.next(), Some(&1));
    /// assert_eq!(first.next(), Some(&2));
    /// assert_eq!(second.next(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            elements: &self.elements,
            position: 0,
        }
    }

    /// Applies `transform` to every element in order and collects the results.
    ///
    /// The output is a plain `Vec` because the transformed type need not be
    /// hashable, and transformed values may collide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into();
    /// let parity: Vec<bool> = set.map(|element| element % 2 == 0);
    /// assert_eq!(parity, vec![false, true, false]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(transform).collect()
    }

    /// Calls `action` on every element in insertion order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }

    /// Removes every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.positions.clear();
    }

    /// Consumes the set and returns its elements in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Appends `element` at the end of the set.
    ///
    /// Returns `true` if the element was added. If an equal element is
    /// already present the set is left unchanged, the existing element keeps
    /// its position, and `false` is returned.
    ///
    /// # Complexity
    ///
    /// O(1) amortized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.append("a"));
    /// assert!(set.append("b"));
    /// assert!(!set.append("a"));
    /// assert_eq!(set.as_slice(), &["a", "b"]);
    /// ```
    pub fn append(&mut self, element: T) -> bool {
        if self.positions.contains_key(&element) {
            return false;
        }
        self.positions.insert(element.clone(), self.elements.len());
        self.elements.push(element);
        self.debug_assert_consistent();
        true
    }

    /// Removes `element` and returns the stored value.
    ///
    /// Every element after it shifts one position towards the front and has
    /// its index entry rewritten before this method returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no equal element is present. The set is
    /// left unchanged in that case.
    ///
    /// # Complexity
    ///
    /// O(n) for the shift and re-index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    ///
    /// let mut set: OrderedSet<String> =
    ///     ["a", "b", "c"].into_iter().map(String::from).collect();
    ///
    /// assert_eq!(set.remove("a"), Ok("a".to_string()));
    /// assert_eq!(set.index_of("c"), Some(1));
    /// assert!(set.remove("a").is_err());
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(position) = self.positions.remove(element) else {
            tracing::debug!(length = self.elements.len(), "remove: element not present");
            return Err(Error::NotFound {
                operation: "OrderedSet::remove",
            });
        };
        Ok(self.take_at(position))
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    ///
    /// let mut set: OrderedSet<char> = ['x', 'y', 'z'].into();
    /// assert_eq!(set.remove_index(1), Ok('y'));
    /// assert_eq!(set.as_slice(), &['x', 'z']);
    /// assert!(set.remove_index(2).unwrap_err().is_invalid_argument());
    /// ```
    pub fn remove_index(&mut self, index: usize) -> Result<T> {
        let Some(element) = self.elements.get(index) else {
            return Err(Error::InvalidArgument {
                operation: "OrderedSet::remove_index",
                argument: "index",
                reason: format!(
                    "index {index} is out of bounds for length {}",
                    self.elements.len()
                ),
            });
        };
        self.positions.remove(element);
        Ok(self.take_at(index))
    }

    /// Returns `true` if an element equal to `element` is present.
    ///
    /// Never mutates the set. Borrowed forms work through `Borrow`, so a
    /// `OrderedSet<String>` can be queried with `&str`.
    ///
    /// # Complexity
    ///
    /// O(1) average.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    /// Returns the insertion-order position of `element`, if present.
    #[inline]
    #[must_use]
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(element).copied()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Survivors keep their relative order and the index is rebuilt once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::collection::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=6).collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set.as_slice(), &[2, 4, 6]);
    /// assert_eq!(set.index_of(&6), Some(2));
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let positions = &mut self.positions;
        self.elements.retain(|element| {
            let keep = predicate(element);
            if !keep {
                positions.remove(element);
            }
            keep
        });
        self.reindex_from(0);
        self.debug_assert_consistent();
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
        self.positions.reserve(additional);
    }

    /// Removes the element at `position` after its index entry is gone, then
    /// re-indexes everything behind it.
    fn take_at(&mut self, position: usize) -> T {
        let removed = self.elements.remove(position);
        self.reindex_from(position);
        self.debug_assert_consistent();
        removed
    }

    fn reindex_from(&mut self, start: usize) {
        for (offset, element) in self.elements[start..].iter().enumerate() {
            if let Some(slot) = self.positions.get_mut(element) {
                *slot = start + offset;
            }
        }
    }

    #[inline]
    fn debug_assert_consistent(&self) {
        debug_assert!(self.is_consistent(), "{}", INDEX_INVARIANT_PANIC_MESSAGE);
    }

    fn is_consistent(&self) -> bool {
        self.elements.len() == self.positions.len()
            && self
                .elements
                .iter()
                .enumerate()
                .all(|(position, element)| self.positions.get(element) == Some(&position))
    }
}

const INDEX_INVARIANT_PANIC_MESSAGE: &str =
    "OrderedSet index out of sync: every element must map to its own position";

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of an [`OrderedSet`] in
/// insertion order.
///
/// Holds its own cursor, so separate iterators over one set never interfere.
#[derive(Clone)]
pub struct OrderedSetIterator<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.position)?;
        self.position += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.elements.len() - self.position
    }
}

impl<T> FusedIterator for OrderedSetIterator<'_, T> {}

/// Owning iterator over the elements of an [`OrderedSet`] in insertion order.
pub struct OrderedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for OrderedSetIntoIterator<T> {}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

// =============================================================================
// Construction Traits
// =============================================================================

impl<T, S: Default> Default for OrderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    /// Appends elements in iteration order; later duplicates are ignored.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T, S, const N: usize> From<[T; N]> for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> From<Vec<T>> for OrderedSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

// =============================================================================
// Standard Traits
// =============================================================================

impl<T, S> Index<usize> for OrderedSet<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T: fmt::Debug, S> fmt::Debug for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

/// Two sets are equal when they hold equal elements in the same order.
impl<T: PartialEq, S> PartialEq for OrderedSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, S> Eq for OrderedSet<T, S> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for OrderedSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> OrderedSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for OrderedSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    type Value = OrderedSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(4096);
        let mut set = OrderedSet::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            set.append(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for OrderedSet<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
