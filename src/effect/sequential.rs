//! Fail-fast sequential composition.
//!
//! Operands run strictly one after another, in the order given. The first
//! error stops the chain: later operands are never started.
//!
//! # Example
//!
//! ```
//! use sidekick::effect::sequential::sequence;
//! use sidekick::Effect;
//!
//! let all = sequence(vec![
//!     Effect::<_, String>::succeed(1),
//!     Effect::succeed(2),
//!     Effect::succeed(3),
//! ]);
//! assert_eq!(all.block().unwrap(), Ok(vec![1, 2, 3]));
//! ```

use super::Effect;

/// Run effects in order, collecting their values; stop at the first error.
///
/// An empty input succeeds with an empty vector.
pub fn sequence<T, E, I>(effects: I) -> Effect<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
    I: IntoIterator<Item = Effect<T, E>>,
{
    let effects: Vec<_> = effects.into_iter().collect();
    Effect::defer(move || async move {
        let mut values = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect.run().await? {
                Ok(value) => values.push(value),
                Err(error) => return Ok(Err(error)),
            }
        }
        Ok(Ok(values))
    })
}

/// Map each item to an effect and [`sequence`] them.
///
/// `f` is applied lazily, one item at a time, so items after the first error
/// are never even turned into effects.
///
/// # Example
///
/// ```
/// use sidekick::effect::sequential::traverse;
/// use sidekick::Effect;
///
/// let parsed = traverse(vec!["1", "x", "3"], |s| {
///     Effect::from_result(s.parse::<i32>().map_err(|_| format!("not a number: {}", s)))
/// });
/// assert_eq!(parsed.block().unwrap(), Err("not a number: x".to_string()));
/// ```
pub fn traverse<A, T, E, I, F>(items: I, mut f: F) -> Effect<Vec<T>, E>
where
    A: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Effect<T, E> + Send + 'static,
{
    let items: Vec<_> = items.into_iter().collect();
    Effect::defer(move || async move {
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            match f(item).run().await? {
                Ok(value) => values.push(value),
                Err(error) => return Ok(Err(error)),
            }
        }
        Ok(Ok(values))
    })
}

/// Run `first`, then `second`, pairing their values.
pub fn zip<A, B, E>(first: Effect<A, E>, second: Effect<B, E>) -> Effect<(A, B), E>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
{
    zip_with(first, second, |a, b| (a, b))
}

/// Run `first`, then `second`, combining their values with `f`.
///
/// `second` never starts when `first` fails.
pub fn zip_with<A, B, R, E, F>(first: Effect<A, E>, second: Effect<B, E>, f: F) -> Effect<R, E>
where
    A: Send + 'static,
    B: Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
    F: FnOnce(A, B) -> R + Send + 'static,
{
    first.and_then(move |a| second.map(move |b| f(a, b)))
}
