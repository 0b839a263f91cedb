//! Ways into an [`Effect`].

use std::future::{self, Future};

use super::{BoxError, Effect, Fault};

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// An effect that succeeds with `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let effect = Effect::<_, String>::succeed(42);
    /// assert_eq!(effect.block().unwrap(), Ok(42));
    /// ```
    pub fn succeed(value: T) -> Self {
        Effect::defer(move || future::ready(Ok(Ok(value))))
    }

    /// An effect that fails with `error`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let effect = Effect::<i32, _>::fail("not found");
    /// assert_eq!(effect.block().unwrap(), Err("not found"));
    /// ```
    pub fn fail(error: E) -> Self {
        Effect::defer(move || future::ready(Ok(Err(error))))
    }

    /// An effect that faults.
    pub fn raise(fault: Fault) -> Self {
        Effect::defer(move || future::ready(Err(fault)))
    }

    /// Defer a computation until the effect runs.
    ///
    /// A panic inside `thunk` becomes a [`Fault::Panic`].
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let effect = Effect::<i32, String>::suspend(|| panic!("kaboom"));
    /// assert!(effect.block().unwrap_err().is_panic());
    /// ```
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Effect::defer(move || async move { Ok(Ok(thunk())) })
    }

    /// Defer a fallible computation whose error is unexpected.
    ///
    /// `Err(x)` becomes a [`Fault::Source`]; it never lands in `E`.
    pub fn try_suspend<F, X>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<T, X> + Send + 'static,
        X: Into<BoxError>,
    {
        Effect::defer(move || async move { thunk().map(Ok).map_err(Fault::from_source) })
    }

    /// Lift a `Result` into the typed channels.
    pub fn from_result(result: Result<T, E>) -> Self {
        Effect::defer(move || future::ready(Ok(result)))
    }

    /// `Some(value)` succeeds, `None` fails with `on_absent()`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let missing = Effect::from_option(None::<i32>, || "absent");
    /// assert_eq!(missing.block().unwrap(), Err("absent"));
    /// ```
    pub fn from_option<F>(option: Option<T>, on_absent: F) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
    {
        Effect::defer(move || async move { Ok(option.ok_or_else(on_absent)) })
    }

    /// Choose between a success and a failure with a boolean.
    ///
    /// Only the chosen side is evaluated.
    pub fn rules<S, F>(is_valid: bool, on_success: S, on_error: F) -> Self
    where
        S: FnOnce() -> T + Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        Effect::defer(move || async move {
            if is_valid {
                Ok(Ok(on_success()))
            } else {
                Ok(Err(on_error()))
            }
        })
    }

    /// Adapt an infallible asynchronous source.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = Effect::<_, String>::from_future(async { 7 });
    /// assert_eq!(effect.run().await.unwrap(), Ok(7));
    /// # });
    /// ```
    pub fn from_future<Fut>(source: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        Effect::defer(move || async move { Ok(Ok(source.await)) })
    }

    /// Adapt a fallible asynchronous source whose errors are unexpected.
    ///
    /// The source's error becomes a [`Fault::Source`], preserving the
    /// original so [`fault_to_error_of`](Effect::fault_to_error_of) can recover it.
    pub fn from_async<Fut, X>(source: Fut) -> Self
    where
        Fut: Future<Output = Result<T, X>> + Send + 'static,
        X: Into<BoxError>,
    {
        Effect::defer(move || async move { source.await.map(Ok).map_err(Fault::from_source) })
    }

    /// Adapt an asynchronous source that already speaks the typed channels.
    pub fn from_async_result<Fut>(source: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Effect::defer(move || async move { Ok(source.await) })
    }

    /// Adapt a fallible asynchronous source, mapping its error into `E`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let source = async { Err::<i32, _>(std::io::Error::other("disk gone")) };
    /// let effect = Effect::from_async_with(source, |err| format!("storage: {}", err));
    /// assert_eq!(effect.run().await.unwrap(), Err("storage: disk gone".to_string()));
    /// # });
    /// ```
    pub fn from_async_with<Fut, X, H>(source: Fut, handle: H) -> Self
    where
        Fut: Future<Output = Result<T, X>> + Send + 'static,
        H: FnOnce(X) -> E + Send + 'static,
    {
        Effect::defer(move || async move { Ok(source.await.map_err(handle)) })
    }

    /// Adapt an asynchronous source that may produce nothing.
    ///
    /// An empty source fails with `on_empty()`.
    pub fn from_async_option<Fut, F>(source: Fut, on_empty: F) -> Self
    where
        Fut: Future<Output = Option<T>> + Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        Effect::defer(move || async move { Ok(source.await.ok_or_else(on_empty)) })
    }
}

impl<E> Effect<(), E>
where
    E: Send + 'static,
{
    /// Succeeds with `()`.
    pub fn unit() -> Self {
        Effect::succeed(())
    }

    /// Fails with `on_true()` when `condition` holds, succeeds with `()` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let age = 15;
    /// let check = Effect::fail_when(age < 18, || "must be an adult");
    /// assert_eq!(check.block().unwrap(), Err("must be an adult"));
    /// ```
    #[doc(alias = "when")]
    pub fn fail_when<F>(condition: bool, on_true: F) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
    {
        Effect::defer(move || async move {
            if condition {
                Ok(Err(on_true()))
            } else {
                Ok(Ok(()))
            }
        })
    }
}
