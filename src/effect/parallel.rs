//! Error-accumulating parallel composition.
//!
//! Every operand is started and awaited, even when some of them fail. The
//! combined effect succeeds only if all operands succeed; otherwise it fails
//! with an [`ErrorList`] holding every error, ordered by operand position.
//! Completion order never affects that order.
//!
//! A fault in any operand faults the combined effect. When several operands
//! fault, the leftmost one wins. All operands still run to completion first;
//! nothing is cancelled.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sidekick::effect::parallel::par_zip;
//! use sidekick::Effect;
//!
//! # tokio_test::block_on(async {
//! // The first operand finishes last; its error still comes first.
//! let slow = Effect::<i32, _>::from_async_result(async {
//!     tokio::time::sleep(Duration::from_millis(20)).await;
//!     Err("slow")
//! });
//! let fast = Effect::<i32, _>::fail("fast");
//!
//! let errors = par_zip(slow, fast).run().await.unwrap().unwrap_err();
//! assert_eq!(errors.into_vec(), vec!["slow", "fast"]);
//! # });
//! ```

use futures::future::join_all;

use super::Effect;
use crate::{ErrorList, Validation};

fn lift<T, E>(result: Result<T, E>) -> Validation<T, ErrorList<E>> {
    Validation::from_result(result.map_err(ErrorList::one))
}

/// Run both effects concurrently and pair their values, accumulating errors.
pub fn par_zip<A, B, E>(first: Effect<A, E>, second: Effect<B, E>) -> Effect<(A, B), ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
{
    par_zip_with(first, second, |a, b| (a, b))
}

/// Run both effects concurrently and combine their values with `f`, accumulating errors.
///
/// | first | second | result |
/// |---|---|---|
/// | `Ok(a)` | `Ok(b)` | `Ok(f(a, b))` |
/// | `Err(e1)` | `Ok(_)` | `Err([e1])` |
/// | `Ok(_)` | `Err(e2)` | `Err([e2])` |
/// | `Err(e1)` | `Err(e2)` | `Err([e1, e2])` |
pub fn par_zip_with<A, B, R, E, F>(
    first: Effect<A, E>,
    second: Effect<B, E>,
    f: F,
) -> Effect<R, ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    F: FnOnce(A, B) -> R + Send + 'static,
{
    Effect::defer(move || async move {
        let (left, right) = futures::join!(first.run(), second.run());
        let (left, right) = (left?, right?);
        let merged = lift(left).and(lift(right));
        if let Validation::Failure(errors) = &merged {
            tracing::trace!(errors = errors.len(), "parallel zip accumulated errors");
        }
        Ok(merged.into_result().map(|(a, b)| f(a, b)))
    })
}

/// Three-way [`par_zip`].
pub fn par_zip3<A, B, C, E>(
    first: Effect<A, E>,
    second: Effect<B, E>,
    third: Effect<C, E>,
) -> Effect<(A, B, C), ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    E: Send + 'static,
{
    par_zip3_with(first, second, third, |a, b, c| (a, b, c))
}

/// Three-way [`par_zip_with`].
///
/// Built by zipping the first pair, then zipping that with the third operand
/// and flattening the nested error lists.
pub fn par_zip3_with<A, B, C, R, E, F>(
    first: Effect<A, E>,
    second: Effect<B, E>,
    third: Effect<C, E>,
    f: F,
) -> Effect<R, ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    F: FnOnce(A, B, C) -> R + Send + 'static,
{
    par_zip_with(
        par_zip(first, second),
        third.map_err(ErrorList::one),
        move |(a, b), c| f(a, b, c),
    )
    .map_err(ErrorList::flatten)
}

/// Four-way [`par_zip`].
pub fn par_zip4<A, B, C, D, E>(
    first: Effect<A, E>,
    second: Effect<B, E>,
    third: Effect<C, E>,
    fourth: Effect<D, E>,
) -> Effect<(A, B, C, D), ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    E: Send + 'static,
{
    par_zip4_with(first, second, third, fourth, |a, b, c, d| (a, b, c, d))
}

/// Four-way [`par_zip_with`].
pub fn par_zip4_with<A, B, C, D, R, E, F>(
    first: Effect<A, E>,
    second: Effect<B, E>,
    third: Effect<C, E>,
    fourth: Effect<D, E>,
    f: F,
) -> Effect<R, ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    F: FnOnce(A, B, C, D) -> R + Send + 'static,
{
    par_zip_with(
        par_zip3(first, second, third),
        fourth.map_err(ErrorList::one),
        move |(a, b, c), d| f(a, b, c, d),
    )
    .map_err(ErrorList::flatten)
}

/// Five-way [`par_zip`].
pub fn par_zip5<A, B, C, D, G, E>(
    first: Effect<A, E>,
    second: Effect<B, E>,
    third: Effect<C, E>,
    fourth: Effect<D, E>,
    fifth: Effect<G, E>,
) -> Effect<(A, B, C, D, G), ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    G: Send + 'static,
    E: Send + 'static,
{
    par_zip5_with(first, second, third, fourth, fifth, |a, b, c, d, g| {
        (a, b, c, d, g)
    })
}

/// Five-way [`par_zip_with`].
pub fn par_zip5_with<A, B, C, D, G, R, E, F>(
    first: Effect<A, E>,
    second: Effect<B, E>,
    third: Effect<C, E>,
    fourth: Effect<D, E>,
    fifth: Effect<G, E>,
    f: F,
) -> Effect<R, ErrorList<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
    G: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    F: FnOnce(A, B, C, D, G) -> R + Send + 'static,
{
    par_zip_with(
        par_zip4(first, second, third, fourth),
        fifth.map_err(ErrorList::one),
        move |(a, b, c, d), g| f(a, b, c, d, g),
    )
    .map_err(ErrorList::flatten)
}

/// Run all effects concurrently, collecting values in input order and accumulating errors.
///
/// An empty input succeeds with an empty vector.
///
/// # Example
///
/// ```
/// use sidekick::effect::parallel::par_sequence;
/// use sidekick::Effect;
///
/// let checks = par_sequence(vec![
///     Effect::<i32, _>::fail("a"),
///     Effect::succeed(2),
///     Effect::fail("c"),
/// ]);
/// let errors = checks.block().unwrap().unwrap_err();
/// assert_eq!(errors.into_vec(), vec!["a", "c"]);
/// ```
pub fn par_sequence<T, E, I>(effects: I) -> Effect<Vec<T>, ErrorList<E>>
where
    T: Send + 'static,
    E: Send + 'static,
    I: IntoIterator<Item = Effect<T, E>>,
{
    let effects: Vec<_> = effects.into_iter().collect();
    Effect::defer(move || async move {
        let operands = effects.len();
        let outcomes = join_all(effects.into_iter().map(Effect::run)).await;

        let mut results = Vec::with_capacity(operands);
        for outcome in outcomes {
            results.push(outcome?);
        }

        let merged = Validation::all_vec(results.into_iter().map(lift));
        if let Validation::Failure(errors) = &merged {
            tracing::trace!(
                operands,
                errors = errors.len(),
                "parallel sequence accumulated errors"
            );
        }
        Ok(merged.into_result())
    })
}

/// Map each item to an effect and [`par_sequence`] them.
pub fn par_traverse<A, T, E, I, F>(items: I, f: F) -> Effect<Vec<T>, ErrorList<E>>
where
    T: Send + 'static,
    E: Send + 'static,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Effect<T, E>,
{
    par_sequence(items.into_iter().map(f))
}
