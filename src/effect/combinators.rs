//! Transforming and chaining effects.
//!
//! Every combinator here returns a new lazy effect. None of them touch the
//! fault channel: a fault from the inner effect passes straight through.

use std::future::Future;

use super::{sequential, Effect};

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Transform the success value.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let effect = Effect::<_, String>::succeed(5).map(|x| x * 2);
    /// assert_eq!(effect.block().unwrap(), Ok(10));
    /// ```
    pub fn map<U, F>(self, f: F) -> Effect<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Effect::defer(move || async move { Ok(self.run().await?.map(f)) })
    }

    /// Chain a dependent effect; the continuation only runs on success.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let effect = Effect::<_, String>::succeed(5)
    ///     .and_then(|x| Effect::succeed(x * 2));
    /// assert_eq!(effect.block().unwrap(), Ok(10));
    /// ```
    #[doc(alias = "flat_map")]
    pub fn and_then<U, F>(self, f: F) -> Effect<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Effect<U, E> + Send + 'static,
    {
        Effect::defer(move || async move {
            match self.run().await? {
                Ok(value) => f(value).run().await,
                Err(error) => Ok(Err(error)),
            }
        })
    }

    /// Transform the error value.
    pub fn map_err<E2, G>(self, g: G) -> Effect<T, E2>
    where
        E2: Send + 'static,
        G: FnOnce(E) -> E2 + Send + 'static,
    {
        Effect::defer(move || async move { Ok(self.run().await?.map_err(g)) })
    }

    /// Widen the error type through `Into`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let narrow = Effect::<i32, &str>::fail("nope");
    /// let wide: Effect<i32, String> = narrow.widen();
    /// assert_eq!(wide.block().unwrap(), Err("nope".to_string()));
    /// ```
    pub fn widen<E2>(self) -> Effect<T, E2>
    where
        E: Into<E2>,
        E2: Send + 'static,
    {
        self.map_err(Into::into)
    }

    /// Keep the success only if `predicate` accepts it, failing with `on_reject()` otherwise.
    #[doc(alias = "filter")]
    pub fn ensure<P, F>(self, predicate: P, on_reject: F) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        Effect::defer(move || async move {
            Ok(match self.run().await? {
                Ok(value) => {
                    if predicate(&value) {
                        Ok(value)
                    } else {
                        Err(on_reject())
                    }
                }
                Err(error) => Err(error),
            })
        })
    }

    /// Discard the success value.
    #[doc(alias = "then")]
    pub fn as_unit(self) -> Effect<(), E> {
        self.map(|_| ())
    }

    /// Exchange the success and error channels.
    pub fn swap(self) -> Effect<E, T> {
        Effect::defer(move || async move {
            Ok(match self.run().await? {
                Ok(value) => Err(value),
                Err(error) => Ok(error),
            })
        })
    }

    /// Run an asynchronous side effect on success, keeping the value.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use sidekick::Effect;
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    /// let effect = Effect::<_, String>::succeed(3).tap(move |x| {
    ///     sink.lock().unwrap().push(*x);
    ///     async {}
    /// });
    ///
    /// assert_eq!(effect.block().unwrap(), Ok(3));
    /// assert_eq!(*seen.lock().unwrap(), vec![3]);
    /// ```
    #[doc(alias = "do_on_success")]
    pub fn tap<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Effect::defer(move || async move {
            match self.run().await? {
                Ok(value) => {
                    f(&value).await;
                    Ok(Ok(value))
                }
                Err(error) => Ok(Err(error)),
            }
        })
    }

    /// Run an asynchronous side effect on error, keeping the error.
    #[doc(alias = "do_on_error")]
    pub fn tap_err<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&E) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Effect::defer(move || async move {
            match self.run().await? {
                Ok(value) => Ok(Ok(value)),
                Err(error) => {
                    f(&error).await;
                    Ok(Err(error))
                }
            }
        })
    }

    /// Recover from an error with another effect.
    pub fn or_else<E2, F>(self, f: F) -> Effect<T, E2>
    where
        E2: Send + 'static,
        F: FnOnce(E) -> Effect<T, E2> + Send + 'static,
    {
        Effect::defer(move || async move {
            match self.run().await? {
                Ok(value) => Ok(Ok(value)),
                Err(error) => f(error).run().await,
            }
        })
    }

    /// Run `self`, then `other`, pairing their values. Fail-fast.
    ///
    /// See [`sequential::zip`].
    pub fn zip<U>(self, other: Effect<U, E>) -> Effect<(T, U), E>
    where
        U: Send + 'static,
    {
        sequential::zip(self, other)
    }

    /// Run `self`, then `other`, combining their values with `f`. Fail-fast.
    pub fn zip_with<U, R, F>(self, other: Effect<U, E>, f: F) -> Effect<R, E>
    where
        U: Send + 'static,
        R: Send + 'static,
        F: FnOnce(T, U) -> R + Send + 'static,
    {
        sequential::zip_with(self, other, f)
    }
}
