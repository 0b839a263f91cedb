//! Independent checks that all run and all report.
//!
//! A [`Validator`] collects effects whose values do not matter, only whether
//! they fail. All checks run concurrently; if any fail, every error is reported
//! in the order the checks were added. Otherwise the validator produces the
//! value supplied to [`and_return`](Validator::and_return).
//!
//! # Example
//!
//! ```
//! use sidekick::{validate, Effect};
//!
//! let name = "";
//! let age = 12;
//!
//! let person = validate!(
//!     Effect::fail_when(name.is_empty(), || "name is required"),
//!     Effect::fail_when(age < 18, || "must be an adult"),
//! )
//! .and_return((name, age));
//!
//! let errors = person.block().unwrap().unwrap_err();
//! assert_eq!(errors.into_vec(), vec!["name is required", "must be an adult"]);
//! ```

use std::fmt;

use super::parallel::par_sequence;
use super::Effect;
use crate::ErrorList;

/// Accumulates checks to run in parallel.
pub struct Validator<E> {
    checks: Vec<Effect<(), E>>,
}

impl<E> Validator<E>
where
    E: Send + 'static,
{
    /// A validator with no checks.
    pub fn new() -> Self {
        Validator { checks: Vec::new() }
    }

    /// Add a check. Its success value is discarded.
    #[must_use]
    pub fn check<T>(mut self, effect: Effect<T, E>) -> Self
    where
        T: Send + 'static,
    {
        self.checks.push(effect.as_unit());
        self
    }

    /// Number of checks added so far.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// `true` when no check has been added.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check; succeed with `value` if none failed.
    ///
    /// With no checks, this succeeds with `value`.
    pub fn and_return<A>(self, value: A) -> Effect<A, ErrorList<E>>
    where
        A: Send + 'static,
    {
        par_sequence(self.checks).map(move |_| value)
    }

    /// Run every check; succeed with `make()` if none failed.
    ///
    /// `make` is not called when a check fails.
    pub fn and_return_with<A, F>(self, make: F) -> Effect<A, ErrorList<E>>
    where
        A: Send + 'static,
        F: FnOnce() -> A + Send + 'static,
    {
        par_sequence(self.checks).map(move |_| make())
    }
}

impl<E> Default for Validator<E>
where
    E: Send + 'static,
{
    fn default() -> Self {
        Validator::new()
    }
}

impl<E> fmt::Debug for Validator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("checks", &self.checks.len())
            .finish()
    }
}

/// Build a [`Validator`] from a list of check effects.
///
/// `validate!(a, b, c)` is `Validator::new().check(a).check(b).check(c)`.
#[macro_export]
macro_rules! validate {
    ($($check:expr),+ $(,)?) => {
        $crate::effect::Validator::new()$(.check($check))+
    };
}
