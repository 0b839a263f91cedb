//! Unexpected failures that bypass the typed error channel.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

/// A boxed, thread-safe error produced by an external source.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An unexpected failure of an effect.
///
/// Faults are not domain errors. They propagate past `map`, `and_then`,
/// `map_err` and the accumulating combinators untouched, and reach whoever
/// runs the effect unless converted explicitly with
/// [`Effect::fault_to_error`](crate::Effect::fault_to_error),
/// [`Effect::fault_to_error_if`](crate::Effect::fault_to_error_if),
/// [`Effect::fault_to_error_of`](crate::Effect::fault_to_error_of) or inspected
/// with [`Effect::attempt`](crate::Effect::attempt).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sidekick::Fault;
///
/// let fault = Fault::Timeout { after: Duration::from_millis(5) };
/// assert!(fault.is_timeout());
/// assert_eq!(fault.to_string(), "effect timed out after 5ms");
///
/// let fault = Fault::msg("connection reset");
/// assert!(fault.is_source());
/// assert_eq!(fault.to_string(), "effect source failed: connection reset");
/// ```
#[derive(Debug)]
pub enum Fault {
    /// User code panicked while the effect ran.
    Panic {
        /// The panic payload, when it was a string.
        message: String,
    },
    /// A blocking wait gave up.
    Timeout {
        /// The timeout that elapsed.
        after: Duration,
    },
    /// The blocking executor could not be used.
    Runtime {
        /// Why the executor was unavailable.
        message: String,
    },
    /// An external asynchronous source or fallible thunk failed.
    Source(BoxError),
}

impl Fault {
    /// Wrap a source error.
    pub fn from_source<X>(error: X) -> Self
    where
        X: Into<BoxError>,
    {
        Fault::Source(error.into())
    }

    /// A source fault carrying only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Fault::Source(message.into().into())
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Fault::Panic {
            message: panic_message(payload),
        }
    }

    /// `true` for [`Fault::Panic`].
    pub fn is_panic(&self) -> bool {
        matches!(self, Fault::Panic { .. })
    }

    /// `true` for [`Fault::Timeout`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, Fault::Timeout { .. })
    }

    /// `true` for [`Fault::Source`].
    pub fn is_source(&self) -> bool {
        matches!(self, Fault::Source(_))
    }

    /// Borrow the source error as `X`, if that is what it is.
    pub fn downcast_ref<X>(&self) -> Option<&X>
    where
        X: StdError + 'static,
    {
        match self {
            Fault::Source(error) => error.downcast_ref::<X>(),
            _ => None,
        }
    }

    /// Take the source error as `X`, or give the fault back unchanged.
    pub fn downcast<X>(self) -> Result<X, Fault>
    where
        X: StdError + 'static,
    {
        match self {
            Fault::Source(error) => error
                .downcast::<X>()
                .map(|boxed| *boxed)
                .map_err(Fault::Source),
            other => Err(other),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Panic { message } => write!(f, "effect panicked: {}", message),
            Fault::Timeout { after } => write!(f, "effect timed out after {:?}", after),
            Fault::Runtime { message } => write!(f, "effect runtime unavailable: {}", message),
            Fault::Source(error) => write!(f, "effect source failed: {}", error),
        }
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Fault::Source(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Refused(u16);

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "refused on port {}", self.0)
        }
    }

    impl StdError for Refused {}

    #[test]
    fn test_downcast_matching_type() {
        let fault = Fault::from_source(Refused(5432));
        assert_eq!(fault.downcast_ref::<Refused>(), Some(&Refused(5432)));
        assert_eq!(fault.downcast::<Refused>().ok(), Some(Refused(5432)));
    }

    #[test]
    fn test_downcast_other_type_gives_fault_back() {
        let fault = Fault::msg("plain message");
        let back = fault.downcast::<Refused>().unwrap_err();
        assert_eq!(back.to_string(), "effect source failed: plain message");
    }

    #[test]
    fn test_downcast_non_source_fault() {
        let fault = Fault::Panic {
            message: "boom".to_string(),
        };
        assert!(fault.downcast_ref::<Refused>().is_none());
        assert!(fault.downcast::<Refused>().unwrap_err().is_panic());
    }

    #[test]
    fn test_panic_payload_messages() {
        let from_str = Fault::from_panic(Box::new("static text"));
        let from_string = Fault::from_panic(Box::new("owned text".to_string()));
        let from_other = Fault::from_panic(Box::new(17_u32));

        assert_eq!(from_str.to_string(), "effect panicked: static text");
        assert_eq!(from_string.to_string(), "effect panicked: owned text");
        assert_eq!(from_other.to_string(), "effect panicked: non-string panic payload");
    }

    #[test]
    fn test_error_source_chain() {
        let fault = Fault::from_source(Refused(80));
        let source = fault.source().map(|s| s.to_string());
        assert_eq!(source, Some("refused on port 80".to_string()));
        assert!(Fault::Timeout {
            after: Duration::from_secs(1)
        }
        .source()
        .is_none());
    }
}
