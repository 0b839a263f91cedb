//! Testing utilities and helpers for sidekick
//!
//! This module provides helpers for testing code built from effects: a
//! [`RunCounter`] that counts how often effects actually ran, a [`Timeline`] that
//! records the order in which delayed sources finished, and assertion macros
//! over [`Outcome`](crate::Outcome)s.
//!
//! # Examples
//!
//! ## Checking laziness
//!
//! ```rust
//! use sidekick::testing::RunCounter;
//!
//! let counter = RunCounter::new();
//! let effect = counter.succeed::<_, String>(1);
//! assert_eq!(counter.runs(), 0);
//!
//! effect.block().unwrap().unwrap();
//! assert_eq!(counter.runs(), 1);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use sidekick::{assert_fails, assert_succeeds, Effect};
//!
//! assert_succeeds!(Effect::<_, String>::succeed(42).block(), 42);
//! assert_fails!(Effect::<i32, _>::fail("nope").block(), "nope");
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::effect::Effect;

/// Counts how many of its effects have started running.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RunCounter {
    runs: Arc<AtomicUsize>,
}

impl RunCounter {
    /// A counter that has seen no runs.
    pub fn new() -> Self {
        RunCounter::default()
    }

    /// How many watched effects have started so far.
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    /// Count a run of `effect` when it starts, then run it.
    pub fn watch<T, E>(&self, effect: Effect<T, E>) -> Effect<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        let runs = Arc::clone(&self.runs);
        Effect::suspend(move || {
            runs.fetch_add(1, Ordering::SeqCst);
        })
        .and_then(move |()| effect)
    }

    /// A watched effect that succeeds with `value`.
    pub fn succeed<T, E>(&self, value: T) -> Effect<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        self.watch(Effect::succeed(value))
    }

    /// A watched effect that fails with `error`.
    pub fn fail<T, E>(&self, error: E) -> Effect<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        self.watch(Effect::fail(error))
    }
}

/// Records labels in the order delayed sources complete.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use sidekick::effect::parallel::par_zip;
/// use sidekick::testing::Timeline;
///
/// let timeline = Timeline::new();
/// let slow = timeline.delayed::<i32, &str>("slow", Duration::from_millis(30), Err("slow"));
/// let fast = timeline.delayed::<i32, &str>("fast", Duration::from_millis(1), Err("fast"));
///
/// let errors = par_zip(slow, fast).block().unwrap().unwrap_err();
/// assert_eq!(timeline.events(), vec!["fast", "slow"]);
/// assert_eq!(errors.into_vec(), vec!["slow", "fast"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl Timeline {
    /// An empty timeline.
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Append `label`.
    pub fn record(&self, label: &'static str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(label);
    }

    /// Labels recorded so far, oldest first.
    pub fn events(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// An effect that sleeps for `delay`, records `label`, then yields `result`.
    ///
    /// Needs a tokio runtime with the time driver, which both
    /// [`Effect::block`] and `#[tokio::test]` provide.
    pub fn delayed<T, E>(
        &self,
        label: &'static str,
        delay: Duration,
        result: Result<T, E>,
    ) -> Effect<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        let timeline = self.clone();
        Effect::from_async_result(async move {
            tokio::time::sleep(delay).await;
            timeline.record(label);
            result
        })
    }
}

/// Assert that an outcome is a success, optionally equal to an expected value.
///
/// # Example
///
/// ```rust
/// use sidekick::{assert_succeeds, Effect};
///
/// let outcome = Effect::<_, String>::succeed(vec![1, 2]).block();
/// assert_succeeds!(outcome, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_succeeds {
    ($outcome:expr) => {
        match $outcome {
            Ok(Ok(_)) => {}
            Ok(Err(error)) => panic!("Expected success, got error: {:?}", error),
            Err(fault) => panic!("Expected success, got fault: {}", fault),
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            Ok(Ok(value)) => assert_eq!(value, $expected),
            Ok(Err(error)) => panic!(
                "Expected success {:?}, got error: {:?}",
                $expected, error
            ),
            Err(fault) => panic!("Expected success {:?}, got fault: {}", $expected, fault),
        }
    };
}

/// Assert that an outcome is an expected failure, optionally equal to an expected error.
///
/// # Example
///
/// ```rust
/// use sidekick::{assert_fails, Effect};
///
/// let outcome = Effect::<i32, _>::fail("denied").block();
/// assert_fails!(outcome, "denied");
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($outcome:expr) => {
        match $outcome {
            Ok(Err(_)) => {}
            Ok(Ok(value)) => panic!("Expected error, got success: {:?}", value),
            Err(fault) => panic!("Expected error, got fault: {}", fault),
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            Ok(Err(error)) => assert_eq!(error, $expected),
            Ok(Ok(value)) => panic!(
                "Expected error {:?}, got success: {:?}",
                $expected, value
            ),
            Err(fault) => panic!("Expected error {:?}, got fault: {}", $expected, fault),
        }
    };
}

/// Assert that an outcome is a fault, optionally matching a predicate.
///
/// # Example
///
/// ```rust
/// use sidekick::{assert_faults, Effect, Fault};
///
/// let outcome = Effect::<i32, String>::suspend(|| panic!("bug")).block();
/// assert_faults!(outcome, Fault::is_panic);
/// ```
#[macro_export]
macro_rules! assert_faults {
    ($outcome:expr) => {
        match $outcome {
            Err(_) => {}
            Ok(Ok(value)) => panic!("Expected fault, got success: {:?}", value),
            Ok(Err(error)) => panic!("Expected fault, got error: {:?}", error),
        }
    };
    ($outcome:expr, $predicate:expr) => {
        match $outcome {
            Err(fault) => assert!(($predicate)(&fault), "fault did not match: {}", fault),
            Ok(Ok(value)) => panic!("Expected fault, got success: {:?}", value),
            Ok(Err(error)) => panic!("Expected fault, got error: {:?}", error),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fault;

    #[test]
    fn test_run_counter_counts_only_started_effects() {
        let counter = RunCounter::new();
        let first = counter.succeed::<_, String>(1);
        let _never_run = counter.succeed::<_, String>(2);

        assert_eq!(counter.runs(), 0);
        assert_succeeds!(first.block(), 1);
        assert_eq!(counter.runs(), 1);
    }

    #[test]
    fn test_run_counter_clones_share_count() {
        let counter = RunCounter::new();
        let clone = counter.clone();
        assert_fails!(clone.fail::<i32, _>("x").block(), "x");
        assert_eq!(counter.runs(), 1);
    }

    #[test]
    fn test_timeline_records_in_completion_order() {
        let timeline = Timeline::new();
        let effect = timeline
            .delayed::<_, String>("first", Duration::from_millis(1), Ok(1))
            .and_then({
                let timeline = timeline.clone();
                move |_| timeline.delayed("second", Duration::from_millis(1), Ok(2))
            });
        assert_succeeds!(effect.block(), 2);
        assert_eq!(timeline.events(), vec!["first", "second"]);
    }

    #[test]
    fn test_assert_faults_with_predicate() {
        let outcome = Effect::<i32, String>::raise(Fault::msg("down")).block();
        assert_faults!(outcome, Fault::is_source);
    }

    #[test]
    #[should_panic(expected = "Expected success")]
    fn test_assert_succeeds_panics_on_error() {
        assert_succeeds!(Effect::<i32, _>::fail("boom").block());
    }

    #[test]
    #[should_panic(expected = "Expected fault")]
    fn test_assert_faults_panics_on_success() {
        assert_faults!(Effect::<_, String>::succeed(1).block());
    }
}
