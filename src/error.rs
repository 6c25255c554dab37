//! Error types shared by the collections and algorithms in this crate.
//!
//! Every fallible operation returns [`Result`], so a missing element or an
//! out-of-range argument always reaches the caller as a value.

/// Errors returned by `ordkit` operations.
///
/// # Examples
///
/// ```rust
/// use ordkit::Error;
///
/// let error = Error::NotFound { operation: "OrderedSet::remove" };
/// assert_eq!(format!("{error}"), "OrderedSet::remove: element not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested element is not present.
    #[error("{operation}: element not found")]
    NotFound {
        /// The operation that failed.
        operation: &'static str,
    },

    /// An argument is outside the range the operation can handle.
    #[error("{operation}: invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// The operation that failed.
        operation: &'static str,
        /// The name of the rejected argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
}

impl Error {
    /// Returns `true` if this is a [`Error::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a [`Error::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
