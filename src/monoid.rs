//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` by adding an identity element. Folding a
//! sequence of error lists from `Monoid::empty()` is how nested accumulations
//! collapse into one list.
//!
//! # Mathematical Properties
//!
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Identity**:
//!    ```text
//!    a.combine(M::empty()) == a == M::empty().combine(a)
//!    ```
//!
//! # Examples
//!
//! ```
//! use sidekick::{ErrorList, Monoid, Semigroup};
//!
//! let errors = ErrorList::one("boom");
//! let empty: ErrorList<&str> = Monoid::empty();
//! assert_eq!(errors.clone().combine(empty.clone()), errors);
//! assert_eq!(empty.combine(errors.clone()), errors);
//! ```

use crate::Semigroup;

/// A `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

/// Fold all values with `combine`, starting from the identity.
///
/// Returns `M::empty()` for an empty iterator.
///
/// # Example
///
/// ```
/// use sidekick::monoid::fold_all;
/// use sidekick::ErrorList;
///
/// let lists = vec![ErrorList::one(1), ErrorList::empty(), ErrorList::one(2)];
/// assert_eq!(fold_all(lists).into_vec(), vec![1, 2]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, item| acc.combine(item))
}
