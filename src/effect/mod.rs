//! Lazy, single-shot, two-channel effects.
//!
//! An [`Effect<T, E>`] describes an asynchronous computation that, once run,
//! produces either a success `T`, an expected failure `E`, or a [`Fault`]: an
//! unexpected failure such as a panic in user code or an error raised by an
//! external asynchronous source. Faults travel beside the typed channel and
//! never turn into an `E` unless converted on purpose
//! ([`fault_to_error`](Effect::fault_to_error) and friends).
//!
//! Running an effect yields an [`Outcome<T, E>`]:
//!
//! ```text
//! Ok(Ok(value))   success
//! Ok(Err(error))  expected failure
//! Err(fault)      unexpected failure
//! ```
//!
//! # Laziness
//!
//! Building an effect does no work. The computation starts when the effect is
//! run ([`run`](Effect::run), [`block`](Effect::block), [`fold`](Effect::fold)).
//! Running consumes the effect, so one effect value runs at most once. To run
//! the same computation twice, build it twice.
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use sidekick::Effect;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = calls.clone();
//! let effect = Effect::<_, String>::suspend(move || counter.fetch_add(1, Ordering::SeqCst));
//! assert_eq!(calls.load(Ordering::SeqCst), 0);
//!
//! assert_eq!(effect.block().unwrap(), Ok(0));
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```
//!
//! # Composition
//!
//! Sequential composition ([`and_then`](Effect::and_then),
//! [`sequential::sequence`], [`sequential::zip`]) is fail-fast: the first
//! error stops everything after it. Parallel composition
//! ([`parallel::par_zip`], [`parallel::par_sequence`], [`Validator`]) runs
//! every operand and reports every error, in operand order, as an
//! [`ErrorList`](crate::ErrorList).
//!
//! ```
//! use sidekick::effect::parallel::par_zip_with;
//! use sidekick::Effect;
//!
//! # tokio_test::block_on(async {
//! let name = Effect::<String, &str>::fail("name is blank");
//! let age = Effect::<u8, &str>::fail("age is missing");
//!
//! let person = par_zip_with(name, age, |name, age| (name, age));
//! let errors = person.run().await.unwrap().unwrap_err();
//! assert_eq!(errors.into_vec(), vec!["name is blank", "age is missing"]);
//! # });
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic::AssertUnwindSafe;

use futures::future::BoxFuture;
use futures::FutureExt;

mod combinators;
mod constructors;
mod fault;
pub mod parallel;
pub mod prelude;
mod recover;
mod run;
pub mod sequential;
mod tracing;
pub mod validate;

pub use fault::{BoxError, Fault};
pub use validate::Validator;

/// The result of running an effect: a typed result, or a fault.
pub type Outcome<T, E> = Result<Result<T, E>, Fault>;

type Thunk<T, E> = Box<dyn FnOnce() -> BoxFuture<'static, Outcome<T, E>> + Send>;

/// A lazy asynchronous computation that succeeds with `T`, fails with `E`, or faults.
///
/// See the [module documentation](self) for the execution model.
pub struct Effect<T, E> {
    thunk: Thunk<T, E>,
}

impl<T, E> fmt::Debug for Effect<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("thunk", &"<deferred>")
            .finish()
    }
}

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Build an effect from a future factory.
    ///
    /// `make` is only called when the effect runs. Panics raised while the
    /// produced future is polled are captured as [`Fault::Panic`].
    pub(crate) fn defer<F, Fut>(make: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Effect {
            thunk: Box::new(move || guard(make()).boxed()),
        }
    }

    /// Run the effect to completion.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = Effect::<_, String>::succeed(21).map(|x| x * 2).run().await;
    /// assert_eq!(outcome.unwrap(), Ok(42));
    /// # });
    /// ```
    pub async fn run(self) -> Outcome<T, E> {
        (self.thunk)().await
    }
}

/// Awaiting an effect runs it.
///
/// ```
/// use sidekick::Effect;
///
/// # tokio_test::block_on(async {
/// assert_eq!(Effect::<_, String>::succeed(3).await.unwrap(), Ok(3));
/// # });
/// ```
impl<T, E> IntoFuture for Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = Outcome<T, E>;
    type IntoFuture = BoxFuture<'static, Outcome<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.run().boxed()
    }
}

async fn guard<T, E, Fut>(future: Fut) -> Outcome<T, E>
where
    Fut: Future<Output = Outcome<T, E>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(payload) => {
            let fault = Fault::from_panic(payload);
            ::tracing::debug!(%fault, "panic inside effect captured as fault");
            Err(fault)
        }
    }
}
