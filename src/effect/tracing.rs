//! Span instrumentation for effects.

use tracing::Instrument as _;

use super::Effect;

impl<T, E> Effect<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Run the effect inside `span`.
    ///
    /// The span is entered each time the effect's future is polled, so events
    /// emitted by nested effects and sources are attributed to it.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::Effect;
    ///
    /// let effect = Effect::<_, String>::succeed(42)
    ///     .instrument(tracing::debug_span!("compute", answer = 42));
    /// assert_eq!(effect.block().unwrap(), Ok(42));
    /// ```
    pub fn instrument(self, span: tracing::Span) -> Self {
        Effect::defer(move || self.run().instrument(span))
    }
}
