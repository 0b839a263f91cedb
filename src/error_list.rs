//! Ordered, concatenable list of errors
//!
//! `ErrorList<E>` is what the error-accumulating combinators fail with. Order is
//! significant: errors appear in the position order of the operands that produced
//! them, never in the order those operands happened to finish.
//!
//! # Examples
//!
//! ```
//! use sidekick::{ErrorList, Semigroup};
//!
//! let errors = ErrorList::one("missing name").append("missing email");
//! let more = ErrorList::one("bad age");
//!
//! let all = errors.combine(more);
//! assert_eq!(all.len(), 3);
//! assert_eq!(all.first(), Some(&"missing name"));
//! ```

use std::fmt;

use crate::monoid::fold_all;
use crate::{Monoid, Semigroup};

/// An ordered, append-only sequence of errors.
///
/// Concatenation (`combine`) is associative and the empty list is its identity,
/// so `ErrorList` is a [`Monoid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorList<E> {
    errors: Vec<E>,
}

impl<E> ErrorList<E> {
    /// The list with no errors.
    pub fn empty() -> Self {
        ErrorList { errors: Vec::new() }
    }

    /// A list holding a single error.
    pub fn one(error: E) -> Self {
        ErrorList {
            errors: vec![error],
        }
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when no error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first error, if any.
    pub fn first(&self) -> Option<&E> {
        self.errors.first()
    }

    /// Iterate over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Returns a new list with `error` at the end.
    #[must_use]
    pub fn append(mut self, error: E) -> Self {
        self.errors.push(error);
        self
    }

    /// Transform every error, keeping order.
    pub fn map<E2, F>(self, f: F) -> ErrorList<E2>
    where
        F: FnMut(E) -> E2,
    {
        ErrorList {
            errors: self.errors.into_iter().map(f).collect(),
        }
    }

    /// Convert every error into a wider error type.
    ///
    /// ```
    /// use sidekick::ErrorList;
    ///
    /// let narrow: ErrorList<&str> = ErrorList::one("boom");
    /// let wide: ErrorList<String> = narrow.widen();
    /// assert_eq!(wide.into_vec(), vec!["boom".to_string()]);
    /// ```
    pub fn widen<E2>(self) -> ErrorList<E2>
    where
        E: Into<E2>,
    {
        self.map(Into::into)
    }

    /// The errors as a plain vector.
    pub fn into_vec(self) -> Vec<E> {
        self.errors
    }

    /// Borrow the errors as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.errors
    }
}

impl<E> ErrorList<ErrorList<E>> {
    /// Flatten a list of lists into one list, outer order first, inner order second.
    ///
    /// Nested parallel zips produce nested error lists; flattening restores a
    /// single list in operand order.
    ///
    /// ```
    /// use sidekick::ErrorList;
    ///
    /// let nested = ErrorList::one(ErrorList::one(1).append(2)).append(ErrorList::one(3));
    /// assert_eq!(nested.flatten().into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(self) -> ErrorList<E> {
        fold_all(self.errors)
    }
}

impl<E> Default for ErrorList<E> {
    fn default() -> Self {
        ErrorList::empty()
    }
}

impl<E> Semigroup for ErrorList<E> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl<E> Monoid for ErrorList<E> {
    fn empty() -> Self {
        ErrorList::empty()
    }
}

impl<E> From<Vec<E>> for ErrorList<E> {
    fn from(errors: Vec<E>) -> Self {
        ErrorList { errors }
    }
}

impl<E> FromIterator<E> for ErrorList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        ErrorList {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<E> IntoIterator for ErrorList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl<E: fmt::Display> fmt::Display for ErrorList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
