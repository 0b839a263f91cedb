//! Recovering from errors and converting faults.

use std::error::Error as StdError;

use super::{Effect, Fault};

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Replace any error with `value`. Faults still propagate.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let effect = Effect::<i32, _>::fail("cache miss").fallback(0);
    /// assert_eq!(effect.block().unwrap(), Ok(0));
    /// ```
    #[doc(alias = "on_error_return")]
    pub fn fallback(self, value: T) -> Self {
        Effect::defer(move || async move { Ok(Ok(self.run().await?.unwrap_or(value))) })
    }

    /// Expose the typed result and move any fault into the error channel.
    ///
    /// The returned effect never faults on account of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::{Effect, Fault};
    ///
    /// let faulty = Effect::<i32, String>::raise(Fault::msg("socket closed"));
    /// let inspected = faulty.attempt().block().unwrap();
    /// assert!(inspected.unwrap_err().is_source());
    /// ```
    pub fn attempt(self) -> Effect<Result<T, E>, Fault> {
        Effect::defer(move || async move { Ok(self.run().await) })
    }

    /// Convert every fault into an error with `recover`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::{Effect, Fault};
    ///
    /// let faulty = Effect::<i32, String>::raise(Fault::msg("socket closed"));
    /// let typed = faulty.fault_to_error(|fault| fault.to_string());
    /// assert_eq!(
    ///     typed.block().unwrap(),
    ///     Err("effect source failed: socket closed".to_string())
    /// );
    /// ```
    pub fn fault_to_error<F>(self, recover: F) -> Self
    where
        F: FnOnce(Fault) -> E + Send + 'static,
    {
        Effect::defer(move || async move {
            match self.run().await {
                Err(fault) => {
                    tracing::trace!(%fault, "fault converted to error");
                    Ok(Err(recover(fault)))
                }
                settled => settled,
            }
        })
    }

    /// Convert faults accepted by `matches` into errors; others stay faults.
    pub fn fault_to_error_if<P, F>(self, matches: P, recover: F) -> Self
    where
        P: FnOnce(&Fault) -> bool + Send + 'static,
        F: FnOnce(Fault) -> E + Send + 'static,
    {
        Effect::defer(move || async move {
            match self.run().await {
                Err(fault) => {
                    if matches(&fault) {
                        tracing::trace!(%fault, "fault converted to error");
                        Ok(Err(recover(fault)))
                    } else {
                        Err(fault)
                    }
                }
                settled => settled,
            }
        })
    }

    /// Convert source faults whose error is an `X` into errors; others stay faults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io;
    /// use sidekick::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let source = async { Err::<u32, _>(io::Error::new(io::ErrorKind::NotFound, "no row")) };
    /// let effect = Effect::<u32, String>::from_async(source)
    ///     .fault_to_error_of(|err: io::Error| format!("lookup failed: {}", err));
    ///
    /// assert_eq!(effect.run().await.unwrap(), Err("lookup failed: no row".to_string()));
    /// # });
    /// ```
    pub fn fault_to_error_of<X, F>(self, recover: F) -> Self
    where
        X: StdError + 'static,
        F: FnOnce(X) -> E + Send + 'static,
    {
        Effect::defer(move || async move {
            match self.run().await {
                Err(fault) => match fault.downcast::<X>() {
                    Ok(source) => {
                        tracing::trace!(error = %source, "fault converted to error");
                        Ok(Err(recover(source)))
                    }
                    Err(unmatched) => Err(unmatched),
                },
                settled => settled,
            }
        })
    }
}
