//! The `ordered_set!` macro for literal construction.
//!
//! This module provides the [`ordered_set!`] macro, which builds an
//! [`OrderedSet`](crate::collection::OrderedSet) from a list of elements the
//! way `vec!` builds a `Vec`.

/// Builds an [`OrderedSet`](crate::collection::OrderedSet) from literal elements.
///
/// Elements are appended in the order written. A repeated element keeps the
/// position of its first occurrence; later repeats are ignored.
///
/// # Syntax
///
/// - `ordered_set![]` - An empty set
/// - `ordered_set![a, b, c]` - A set holding `a`, `b`, `c` in that order
///
/// # Examples
///
/// ```
/// use ordkit::collection::OrderedSet;
/// use ordkit::ordered_set;
///
/// let set: OrderedSet<&str> = ordered_set!["hello", "world", "its", "me"];
/// let elements: Vec<&str> = set.iter().copied().collect();
/// assert_eq!(elements, vec!["hello", "world", "its", "me"]);
/// ```
///
/// ## Repeated elements
///
/// ```
/// use ordkit::ordered_set;
///
/// let set = ordered_set![1, 2, 1, 3, 2];
/// assert_eq!(set.as_slice(), &[1, 2, 3]);
/// ```
///
/// ## Empty set
///
/// ```
/// use ordkit::collection::OrderedSet;
/// use ordkit::ordered_set;
///
/// let set: OrderedSet<i32> = ordered_set![];
/// assert!(set.is_empty());
/// ```
#[macro_export]
macro_rules! ordered_set {
    (@unit $element:expr) => {
        ()
    };

    () => {
        $crate::collection::OrderedSet::new()
    };

    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::collection::OrderedSet::with_capacity(
            <[()]>::len(&[$($crate::ordered_set!(@unit $element)),+]),
        );
        $(
            set.append($element);
        )+
        set
    }};
}
