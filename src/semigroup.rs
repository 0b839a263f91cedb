//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. It is the rule the
//! parallel effect combinators use to merge failures coming from independent
//! operands: the left operand's errors always come first.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use sidekick::{ErrorList, Semigroup};
//!
//! let left = ErrorList::one("name is blank");
//! let right = ErrorList::one("age is negative");
//! assert_eq!(
//!     left.combine(right).into_vec(),
//!     vec!["name is blank", "age is negative"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value. Clone first if the original is still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use sidekick::Semigroup;
    ///
    /// let v1 = vec![1, 2];
    /// let v2 = vec![3, 4];
    /// assert_eq!(v1.combine(v2), vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
