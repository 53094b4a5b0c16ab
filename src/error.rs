//! Error values carried by a failed `Attempt`
//!
//! A `Failure` holds an [`Error`]: an owned, opaque wrapper around any
//! `std::error::Error + Send + Sync + 'static`. The original error is kept as-is and can
//! be recovered by downcasting, so capturing an error never alters it.
//!
//! The remaining types in this module are the errors the crate itself produces:
//!
//! - [`Panicked`]: a panic caught while evaluating a computation;
//! - [`NonFatal`]: what [`Attempt::get`](crate::Attempt::get) returns for a failure;
//! - [`NotFailed`]: the failure produced by [`Attempt::failed`](crate::Attempt::failed)
//!   on a success;
//! - [`PredicateMismatch`]: the failure produced by
//!   [`Attempt::filter`](crate::Attempt::filter) when the predicate is false.
//!
//! # Examples
//!
//! ```
//! use attempt::Error;
//! use std::io;
//!
//! let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "config.toml"));
//! assert!(err.is::<io::Error>());
//! assert_eq!(err.to_string(), "config.toml");
//!
//! let io_err = err.downcast::<io::Error>().unwrap();
//! assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Mutex;

/// Boxed trait object accepted and produced by [`Error`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The error captured by a failed `Attempt`.
///
/// `Error` does not implement `std::error::Error` itself; that keeps the blanket
/// `From<E: std::error::Error>` conversion coherent. Use [`Error::as_dyn`] where a
/// `&dyn std::error::Error` is needed.
pub struct Error {
    inner: BoxError,
}

impl Error {
    /// Create an error from a plain message.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Error;
    ///
    /// let err = Error::msg("disk full");
    /// assert_eq!(err.to_string(), "disk full");
    /// ```
    pub fn msg(message: impl fmt::Display) -> Self {
        Error::from(Message(message.to_string()))
    }

    /// Wrap an already boxed error without boxing it again.
    pub fn from_boxed(inner: BoxError) -> Self {
        Error { inner }
    }

    /// Borrow the underlying error as a trait object.
    pub fn as_dyn(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Returns `true` if the underlying error is of type `E`.
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.inner.is::<E>()
    }

    /// Borrow the underlying error as `E`, if that is its type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Take the underlying error out as `E`, or get `self` back unchanged.
    pub fn downcast<E: StdError + 'static>(self) -> Result<E, Self> {
        match self.inner.downcast::<E>() {
            Ok(err) => Ok(*err),
            Err(inner) => Err(Error { inner }),
        }
    }

    /// Returns `true` if this error must never be captured.
    ///
    /// See [`crate::fatal`] for the classification rules.
    pub fn is_fatal(&self) -> bool {
        crate::fatal::is_fatal(self.as_dyn())
    }

    /// Consume the wrapper and return the boxed error.
    pub fn into_inner(self) -> BoxError {
        self.inner
    }

    // Error payloads are kept as the error itself; anything else is held by `Panicked`.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(err) => return *err,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<std::io::Error>() {
            Ok(err) => return Error::from(*err),
            Err(payload) => payload,
        };
        match payload.downcast::<BoxError>() {
            Ok(err) => Error::from_boxed(*err),
            Err(payload) => Error::from(Panicked::from_payload(payload)),
        }
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Error {
            inner: Box::new(error),
        }
    }
}

impl From<Error> for BoxError {
    fn from(error: Error) -> Self {
        error.inner
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}

/// A non-fatal panic caught while evaluating a computation.
///
/// Holds the panic message and the original payload. Payloads are only `Send`, so the
/// payload sits behind a mutex to keep `Panicked` shareable across threads.
pub struct Panicked {
    message: String,
    payload: Mutex<Option<Box<dyn Any + Send>>>,
}

impl Panicked {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Panicked {
            message,
            payload: Mutex::new(Some(payload)),
        }
    }

    /// The panic message, or a placeholder when the payload was not a string.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and return the original panic payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::{error::Panicked, Attempt};
    ///
    /// let a = Attempt::<()>::from_fn(|| std::panic::panic_any(404u16));
    /// let panicked = a.into_result().unwrap_err().downcast::<Panicked>().unwrap();
    /// let payload = panicked.into_payload().unwrap();
    /// assert_eq!(payload.downcast_ref::<u16>(), Some(&404));
    /// ```
    pub fn into_payload(self) -> Option<Box<dyn Any + Send>> {
        self.payload
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panicked")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for Panicked {}

/// The failure observed by a caller that extracts a value without recovering first.
///
/// Wraps the original error unchanged; it is also reachable through
/// [`source`](StdError::source).
///
/// # Example
///
/// ```
/// use attempt::{Attempt, Error};
///
/// let failed: Attempt<i32> = Attempt::failure(Error::msg("boom"));
/// let err = failed.get().unwrap_err();
/// assert_eq!(err.cause().to_string(), "boom");
/// ```
#[derive(Debug)]
pub struct NonFatal {
    cause: Error,
}

impl NonFatal {
    pub(crate) fn new(cause: Error) -> Self {
        NonFatal { cause }
    }

    /// The captured error.
    pub fn cause(&self) -> &Error {
        &self.cause
    }

    /// Consume the wrapper and return the captured error.
    pub fn into_cause(self) -> Error {
        self.cause
    }
}

impl fmt::Display for NonFatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "non-fatal failure: {}", self.cause)
    }
}

impl StdError for NonFatal {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_dyn())
    }
}

/// Produced by `failed()` on a success: there was no error to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotFailed;

impl fmt::Display for NotFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computation did not fail")
    }
}

impl StdError for NotFailed {}

/// Produced by `filter()` when the predicate rejects the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PredicateMismatch;

impl fmt::Display for PredicateMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "predicate does not hold")
    }
}

impl StdError for PredicateMismatch {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_preserves_original() {
        let err = Error::from(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn test_downcast_wrong_type_returns_self() {
        let err = Error::msg("plain");
        let err = err.downcast::<io::Error>().unwrap_err();
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_display_and_debug_delegate() {
        let err = Error::from(PredicateMismatch);
        assert_eq!(err.to_string(), "predicate does not hold");
        assert_eq!(format!("{:?}", err), "PredicateMismatch");
    }

    #[test]
    fn test_from_panic_with_str_payload() {
        let err = Error::from_panic(Box::new("attempt to divide by zero"));
        let panicked = err.downcast_ref::<Panicked>().unwrap();
        assert_eq!(panicked.message(), "attempt to divide by zero");
        assert_eq!(err.to_string(), "panicked: attempt to divide by zero");
    }

    #[test]
    fn test_from_panic_with_string_payload() {
        let err = Error::from_panic(Box::new(String::from("index 3 out of range")));
        assert_eq!(
            err.downcast_ref::<Panicked>().unwrap().message(),
            "index 3 out of range"
        );
    }

    #[test]
    fn test_from_panic_with_error_payload_keeps_error() {
        let err = Error::from_panic(Box::new(Error::from(NotFailed)));
        assert!(err.is::<NotFailed>());
    }

    #[test]
    fn test_from_panic_with_opaque_payload() {
        let err = Error::from_panic(Box::new(17u8));
        let panicked = err.downcast::<Panicked>().unwrap();
        assert_eq!(panicked.message(), "unknown panic payload");
        let payload = panicked.into_payload().unwrap();
        assert_eq!(payload.downcast_ref::<u8>(), Some(&17));
    }

    #[test]
    fn test_from_panic_with_io_error_payload_keeps_error() {
        let err = Error::from_panic(Box::new(io::Error::new(
            io::ErrorKind::NotFound,
            "config.toml",
        )));
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.to_string(), "config.toml");
    }

    #[test]
    fn test_from_panic_with_boxed_error_payload_keeps_error() {
        let boxed: BoxError = Box::new(PredicateMismatch);
        let err = Error::from_panic(Box::new(boxed));
        assert!(err.is::<PredicateMismatch>());
    }

    #[test]
    fn test_panicked_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Panicked>();
    }

    #[test]
    fn test_non_fatal_source_is_cause() {
        let non_fatal = NonFatal::new(Error::from(PredicateMismatch));
        let source = non_fatal.source().unwrap();
        assert!(source.is::<PredicateMismatch>());
        assert_eq!(
            non_fatal.to_string(),
            "non-fatal failure: predicate does not hold"
        );
    }

    #[test]
    fn test_into_boxed_error() {
        let boxed: BoxError = Error::msg("boxed").into();
        assert_eq!(boxed.to_string(), "boxed");

        let back = Error::from_boxed(boxed);
        assert_eq!(back.to_string(), "boxed");
    }

    #[test]
    fn test_is_fatal() {
        assert!(Error::from(crate::Fatal::Interrupted).is_fatal());
        assert!(!Error::msg("recoverable").is_fatal());
    }
}
