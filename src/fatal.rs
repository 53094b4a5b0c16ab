//! Fatal error classification
//!
//! Not every error is safe to turn into a value. An `Attempt` captures *non-fatal*
//! errors into a `Failure`, but errors that signal the execution context itself is
//! compromised, or was deliberately interrupted, must keep propagating.
//!
//! # What counts as fatal
//!
//! - every variant of [`Fatal`];
//! - [`std::io::Error`] values whose kind is [`ErrorKind::OutOfMemory`];
//! - any error whose [`source`](StdError::source) chain contains one of the above.
//!
//! Everything else is non-fatal. Rust aborts the process on allocation failure and on
//! stack overflow, so those conditions never reach this predicate on their own;
//! [`Fatal`] lets code report them (and cancellation) explicitly.
//!
//! # Examples
//!
//! ```
//! use attempt::fatal::{is_fatal, Fatal};
//!
//! assert!(is_fatal(&Fatal::Interrupted));
//!
//! let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
//! assert!(!is_fatal(&not_found));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::io::ErrorKind;

use crate::error::BoxError;
use crate::Error;

/// Conditions that must never be captured into a `Failure`.
///
/// Returning one of these from a computation, or panicking with one as the payload
/// (`std::panic::panic_any(Fatal::Interrupted)`), makes `Attempt` construction unwind
/// instead of producing a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fatal {
    /// Memory could not be obtained.
    OutOfMemory,
    /// The call stack was exhausted.
    StackOverflow,
    /// Execution was cancelled or interrupted on purpose.
    Interrupted,
    /// A critical invariant was violated; continuing would be unsound.
    InvariantViolation(String),
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fatal::OutOfMemory => write!(f, "out of memory"),
            Fatal::StackOverflow => write!(f, "stack overflow"),
            Fatal::Interrupted => write!(f, "execution interrupted"),
            Fatal::InvariantViolation(msg) => write!(f, "invariant violated: {}", msg),
        }
    }
}

impl StdError for Fatal {}

/// Returns `true` if `error` must propagate rather than be captured.
///
/// The decision depends only on the kind of `error` and of the errors in its source
/// chain.
///
/// # Examples
///
/// ```
/// use attempt::fatal::{is_fatal, Fatal};
/// use std::io::{Error, ErrorKind};
///
/// assert!(is_fatal(&Fatal::OutOfMemory));
/// assert!(is_fatal(&Error::new(ErrorKind::OutOfMemory, "allocator gave up")));
/// assert!(!is_fatal(&Error::new(ErrorKind::Interrupted, "EINTR")));
/// ```
pub fn is_fatal(error: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(error);
    while let Some(err) = current {
        if is_fatal_kind(err) {
            return true;
        }
        current = err.source();
    }
    false
}

fn is_fatal_kind(error: &(dyn StdError + 'static)) -> bool {
    if error.is::<Fatal>() {
        return true;
    }
    match error.downcast_ref::<std::io::Error>() {
        Some(io) => io.kind() == ErrorKind::OutOfMemory,
        None => false,
    }
}

/// Returns `true` if a caught panic payload must be resumed rather than captured.
///
/// The payload is classified by the same rules as a returned error: it is fatal when
/// it is a [`Fatal`] value, or an [`Error`], [`std::io::Error`] or [`BoxError`] that
/// [`is_fatal`]. String payloads from `panic!` and `assert!` are non-fatal.
pub fn is_fatal_payload(payload: &(dyn Any + Send)) -> bool {
    if payload.is::<Fatal>() {
        return true;
    }
    if let Some(err) = payload.downcast_ref::<Error>() {
        return is_fatal(err.as_dyn());
    }
    if let Some(err) = payload.downcast_ref::<std::io::Error>() {
        return is_fatal(err);
    }
    match payload.downcast_ref::<BoxError>() {
        Some(err) => is_fatal(err.as_ref()),
        None => false,
    }
}

/// Raise a fatal error by unwinding with it as the payload.
///
/// The payload is the [`Error`] itself, so an enclosing construction point recognises
/// it as fatal again and keeps unwinding.
pub(crate) fn propagate(error: Error) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %error, "fatal error escaped attempt");
    std::panic::resume_unwind(Box::new(error))
}

/// Resume a fatal panic with its original payload.
pub(crate) fn resume(payload: Box<dyn Any + Send>) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!("fatal panic escaped attempt");
    std::panic::resume_unwind(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Wrapper(Box<dyn StdError + Send + Sync>);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(self.0.as_ref())
        }
    }

    #[test]
    fn test_fatal_variants_are_fatal() {
        assert!(is_fatal(&Fatal::OutOfMemory));
        assert!(is_fatal(&Fatal::StackOverflow));
        assert!(is_fatal(&Fatal::Interrupted));
        assert!(is_fatal(&Fatal::InvariantViolation("len < cap".into())));
    }

    #[test]
    fn test_io_out_of_memory_is_fatal() {
        let err = io::Error::new(io::ErrorKind::OutOfMemory, "no pages");
        assert!(is_fatal(&err));
    }

    #[test]
    fn test_other_io_kinds_are_not_fatal() {
        for kind in [
            io::ErrorKind::NotFound,
            io::ErrorKind::Interrupted,
            io::ErrorKind::TimedOut,
            io::ErrorKind::Other,
        ] {
            assert!(!is_fatal(&io::Error::new(kind, "x")), "{:?}", kind);
        }
    }

    #[test]
    fn test_parse_error_is_not_fatal() {
        let err = "abc".parse::<i32>().unwrap_err();
        assert!(!is_fatal(&err));
    }

    #[test]
    fn test_fatal_source_makes_wrapper_fatal() {
        let err = Wrapper(Box::new(Fatal::Interrupted));
        assert!(is_fatal(&err));

        let err = Wrapper(Box::new(io::Error::new(io::ErrorKind::NotFound, "x")));
        assert!(!is_fatal(&err));
    }

    #[test]
    fn test_payload_classification() {
        let fatal: Box<dyn Any + Send> = Box::new(Fatal::StackOverflow);
        assert!(is_fatal_payload(fatal.as_ref()));

        let fatal_error: Box<dyn Any + Send> = Box::new(Error::from(Fatal::Interrupted));
        assert!(is_fatal_payload(fatal_error.as_ref()));

        let plain_error: Box<dyn Any + Send> = Box::new(Error::msg("boom"));
        assert!(!is_fatal_payload(plain_error.as_ref()));

        let message: Box<dyn Any + Send> = Box::new("boom");
        assert!(!is_fatal_payload(message.as_ref()));

        let owned: Box<dyn Any + Send> = Box::new(String::from("boom"));
        assert!(!is_fatal_payload(owned.as_ref()));
    }

    #[test]
    fn test_payload_classified_like_returned_error() {
        let oom: Box<dyn Any + Send> =
            Box::new(io::Error::new(io::ErrorKind::OutOfMemory, "arena"));
        assert!(is_fatal_payload(oom.as_ref()));

        let missing: Box<dyn Any + Send> =
            Box::new(io::Error::new(io::ErrorKind::NotFound, "config.toml"));
        assert!(!is_fatal_payload(missing.as_ref()));

        let boxed_fatal: BoxError = Box::new(Wrapper(Box::new(Fatal::OutOfMemory)));
        let boxed_fatal: Box<dyn Any + Send> = Box::new(boxed_fatal);
        assert!(is_fatal_payload(boxed_fatal.as_ref()));

        let boxed_plain: BoxError = "boom".into();
        let boxed_plain: Box<dyn Any + Send> = Box::new(boxed_plain);
        assert!(!is_fatal_payload(boxed_plain.as_ref()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Fatal::Interrupted.to_string(), "execution interrupted");
        assert_eq!(
            Fatal::InvariantViolation("index in bounds".into()).to_string(),
            "invariant violated: index in bounds"
        );
    }
}
