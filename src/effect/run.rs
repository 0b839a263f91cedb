//! Terminating an effect: folding, awaiting, blocking.

use std::convert::Infallible;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use tokio::runtime::Builder;

use super::fault::panic_message;
use super::{Effect, Fault, Outcome};

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Run the effect and collapse both typed channels into one value.
    ///
    /// Faults are not folded; they come back as `Err`. A panic in either
    /// handler is a fault too.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// # tokio_test::block_on(async {
    /// let status = Effect::<u32, String>::fail("bad input".into())
    ///     .fold(|_| 400, |_| 200)
    ///     .await;
    /// assert_eq!(status.unwrap(), 400);
    /// # });
    /// ```
    pub fn fold<R, FE, FS>(
        self,
        on_error: FE,
        on_success: FS,
    ) -> impl Future<Output = Result<R, Fault>> + Send + 'static
    where
        R: Send + 'static,
        FE: FnOnce(E) -> R + Send + 'static,
        FS: FnOnce(T) -> R + Send + 'static,
    {
        let folded = Effect::<R, Infallible>::defer(move || async move {
            Ok(Ok(match self.run().await? {
                Ok(value) => on_success(value),
                Err(error) => on_error(error),
            }))
        });
        settle(folded)
    }

    /// Like [`fold`](Self::fold), with asynchronous handlers.
    pub fn fold_async<R, FE, FS, FutE, FutS>(
        self,
        on_error: FE,
        on_success: FS,
    ) -> impl Future<Output = Result<R, Fault>> + Send + 'static
    where
        R: Send + 'static,
        FE: FnOnce(E) -> FutE + Send + 'static,
        FS: FnOnce(T) -> FutS + Send + 'static,
        FutE: Future<Output = R> + Send + 'static,
        FutS: Future<Output = R> + Send + 'static,
    {
        let folded = Effect::<R, Infallible>::defer(move || async move {
            Ok(Ok(match self.run().await? {
                Ok(value) => on_success(value).await,
                Err(error) => on_error(error).await,
            }))
        });
        settle(folded)
    }

    /// Run the effect on a private single-threaded executor, blocking the caller.
    ///
    /// The executor has both the IO and time drivers enabled. Blocking is fine
    /// on plain threads and on `spawn_blocking` threads; calling this from an
    /// async task yields [`Fault::Runtime`] instead of stalling the runtime.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let outcome = Effect::<_, String>::succeed("done").block();
    /// assert_eq!(outcome.unwrap(), Ok("done"));
    /// ```
    pub fn block(self) -> Outcome<T, E> {
        block_on_private_runtime(self.run())?
    }

    /// Like [`block`](Self::block), giving up with [`Fault::Timeout`] after `timeout`.
    ///
    /// The abandoned computation is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use sidekick::Effect;
    ///
    /// let slow = Effect::<(), String>::from_future(async {
    ///     tokio::time::sleep(Duration::from_secs(5)).await
    /// });
    /// let outcome = slow.block_timeout(Duration::from_millis(10));
    /// assert!(outcome.unwrap_err().is_timeout());
    /// ```
    pub fn block_timeout(self, timeout: Duration) -> Outcome<T, E> {
        let bounded = async move { tokio::time::timeout(timeout, self.run()).await };
        match block_on_private_runtime(bounded)? {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(?timeout, "effect did not complete in time");
                Err(Fault::Timeout { after: timeout })
            }
        }
    }
}

async fn settle<R>(effect: Effect<R, Infallible>) -> Result<R, Fault>
where
    R: Send + 'static,
{
    match effect.run().await? {
        Ok(value) => Ok(value),
        Err(never) => match never {},
    }
}

fn block_on_private_runtime<F: Future>(future: F) -> Result<F::Output, Fault> {
    // Effect bodies never unwind, so a panic here is tokio refusing to
    // block inside an async context.
    panic::catch_unwind(AssertUnwindSafe(move || -> Result<F::Output, Fault> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| Fault::Runtime {
                message: err.to_string(),
            })?;
        Ok(runtime.block_on(future))
    }))
    .unwrap_or_else(|payload| {
        let fault = Fault::Runtime {
            message: panic_message(payload),
        };
        tracing::debug!(%fault, "effect could not be blocked on");
        Err(fault)
    })
}
