//! Validation type for accumulating errors
//!
//! `Validation` is the synchronous half of error accumulation. It looks like
//! `Result`, but combining two failures keeps both of them (via `Semigroup`)
//! instead of keeping only the first. The parallel effect combinators run their
//! operands, turn each outcome into a `Validation`, and merge them with
//! [`Validation::and`], which is where the operand-order guarantee lives.
//!
//! # Examples
//!
//! ```
//! use sidekick::Validation;
//!
//! let v1 = Validation::<i32, _>::failure(vec!["error1"]);
//! let v2 = Validation::<i32, _>::failure(vec!["error2"]);
//! assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
//!
//! let v1 = Validation::<_, Vec<&str>>::success(1);
//! let v2 = Validation::<_, Vec<&str>>::success(2);
//! assert_eq!(v1.and(v2), Validation::Success((1, 2)));
//! ```

use crate::{Monoid, Semigroup};

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` to accumulate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use sidekick::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Validation::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// The merge table is:
    ///
    /// | self | other | result |
    /// |---|---|---|
    /// | `Success(a)` | `Success(b)` | `Success((a, b))` |
    /// | `Failure(e1)` | `Failure(e2)` | `Failure(e1.combine(e2))` |
    /// | `Failure(e)` | `Success(_)` | `Failure(e)` |
    /// | `Success(_)` | `Failure(e)` | `Failure(e)` |
    ///
    /// `self`'s errors always precede `other`'s.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation.
    ///
    /// The function is only called if the current validation is successful.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Monoid> Validation<T, E> {
    /// Combine all validations, left to right.
    ///
    /// Every element is inspected; errors are concatenated in input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sidekick::Validation;
    ///
    /// let validations = vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ];
    /// let result = Validation::all_vec(validations);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        validations
            .into_iter()
            .fold(Validation::Success(Vec::new()), |acc, next| {
                acc.and(next).map(|(mut values, value)| {
                    values.push(value);
                    values
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_round_trip() {
        assert_eq!(Validation::from_result(Ok::<_, String>(42)).into_result(), Ok(42));
        assert_eq!(
            Validation::from_result(Err::<i32, _>("bad".to_string())).into_result(),
            Err("bad".to_string())
        );
    }

    #[test]
    fn test_and_first_failure_only() {
        let v1 = Validation::<i32, _>::failure(vec!["left"]);
        let v2 = Validation::<i32, Vec<&str>>::success(2);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["left"]));
    }

    #[test]
    fn test_and_second_failure_only() {
        let v1 = Validation::<i32, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["right"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["right"]));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let v = Validation::<i32, _>::failure(vec!["stop"]);
        let result = v.and_then(|_| -> Validation<i32, Vec<&str>> {
            panic!("must not be called")
        });
        assert_eq!(result, Validation::Failure(vec!["stop"]));
    }

    #[test]
    fn test_all_vec_empty_is_success() {
        let result = Validation::<i32, Vec<String>>::all_vec(Vec::new());
        assert_eq!(result, Validation::Success(vec![]));
    }

    #[test]
    fn test_all_vec_collects_values_in_order() {
        let result = Validation::<_, Vec<String>>::all_vec(vec![
            Validation::success(1),
            Validation::success(2),
            Validation::success(3),
        ]);
        assert_eq!(result, Validation::Success(vec![1, 2, 3]));
    }

    #[test]
    fn test_map_err_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["a", "b"]);
        assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(2));
    }
}
