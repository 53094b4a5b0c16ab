//! The `Attempt` outcome type
//!
//! An [`Attempt<T>`] is the already-resolved outcome of a computation that may fail:
//! either `Success(T)` or `Failure(Error)`. Construction evaluates the computation once,
//! on the spot, and turns any *non-fatal* error (a returned `Err` or a panic) into a
//! `Failure`. Fatal errors keep unwinding; see [`crate::fatal`].
//!
//! Once built, an `Attempt` is never mutated. Every combinator consumes it and returns
//! a new one, and every combinator skips its function when it meets a `Failure`, so a
//! chain stops doing work at the first failure and carries that failure to the end.
//!
//! # Examples
//!
//! ```
//! use attempt::Attempt;
//!
//! let port = Attempt::of(|| "8080".parse::<u16>())
//!     .filter(|port| *port >= 1024)
//!     .map(|port| port + 1);
//!
//! assert_eq!(port.get().unwrap(), 8081);
//! ```
//!
//! ## Recovering from a panic
//!
//! ```
//! use attempt::Attempt;
//!
//! let zero = "0".parse::<i32>().unwrap();
//! let ratio = Attempt::from_fn(|| 1 / zero).recover(|_| -1);
//!
//! assert_eq!(ratio.get().unwrap(), -1);
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::error::{NonFatal, NotFailed, PredicateMismatch};
use crate::fatal;
use crate::matcher::Matcher;
use crate::Error;

/// The outcome of a computation that may fail.
///
/// # Type Parameters
///
/// * `T` - The type of the value produced on success
///
/// # Examples
///
/// ```
/// use attempt::{Attempt, Error};
///
/// let ok = Attempt::success(42);
/// let failed: Attempt<i32> = Attempt::failure(Error::msg("boom"));
///
/// match ok {
///     Attempt::Success(v) => assert_eq!(v, 42),
///     Attempt::Failure(e) => panic!("unexpected failure: {}", e),
/// }
/// assert_eq!(failed.get_or(0), 0);
/// ```
#[derive(Debug)]
pub enum Attempt<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a non-fatal error.
    Failure(Error),
}

/// Run `f`, turning a non-fatal panic into an `Error`; fatal panics keep unwinding.
fn catching<R>(f: impl FnOnce() -> R) -> Result<R, Error> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        if fatal::is_fatal_payload(payload.as_ref()) {
            fatal::resume(payload)
        }
        Error::from_panic(payload)
    })
}

impl<T> Attempt<T> {
    // ========== Constructors ==========

    /// Evaluate a fallible computation once and capture its outcome.
    ///
    /// - `Ok(v)` becomes `Success(v)`.
    /// - A non-fatal `Err(e)` becomes `Failure(e)`, with `e` kept unchanged.
    /// - A panic with a non-fatal payload becomes a `Failure`. Error payloads
    ///   (`Error`, `io::Error`, boxed errors) are kept as the error; any other payload
    ///   is held by [`Panicked`](crate::error::Panicked).
    ///
    /// # Panics
    ///
    /// Unwinds when `f` returns or panics with a fatal error (see [`crate::fatal`]).
    /// A fatal panic is resumed with its original payload; a fatal returned error is
    /// raised with the [`Error`] as the payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// let parsed = Attempt::of(|| "42".parse::<i32>());
    /// assert_eq!(parsed.get().unwrap(), 42);
    ///
    /// let parsed = Attempt::of(|| "forty-two".parse::<i32>());
    /// assert!(parsed.is_failure());
    /// ```
    pub fn of<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Error>,
    {
        match catching(f) {
            Ok(Ok(value)) => Attempt::Success(value),
            Ok(Err(error)) => Attempt::captured(error.into()),
            Err(error) => Attempt::captured(error),
        }
    }

    /// Evaluate an infallible-looking computation once, capturing non-fatal panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// let items: Vec<i32> = Vec::new();
    /// let first = Attempt::from_fn(|| items[0]);
    /// assert!(first.is_failure());
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catching(f) {
            Ok(value) => Attempt::Success(value),
            Err(error) => Attempt::captured(error),
        }
    }

    /// Create a successful attempt.
    #[inline]
    pub fn success(value: T) -> Self {
        Attempt::Success(value)
    }

    /// Create a failed attempt.
    ///
    /// No classification happens here: the caller decided this is a failure.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// let a: Attempt<i32> = Attempt::failure(Error::msg("unavailable"));
    /// assert!(a.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: impl Into<Error>) -> Self {
        Attempt::Failure(error.into())
    }

    /// Create an attempt from an existing `Result`.
    ///
    /// # Panics
    ///
    /// Unwinds if the error is fatal, exactly like [`Attempt::of`].
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// let a = Attempt::from_result("7".parse::<u8>());
    /// assert_eq!(a.get_or(0), 7);
    /// ```
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<Error>,
    {
        match result {
            Ok(value) => Attempt::Success(value),
            Err(error) => Attempt::captured(error.into()),
        }
    }

    fn captured(error: Error) -> Self {
        if error.is_fatal() {
            fatal::propagate(error)
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %error, "captured non-fatal error");
        Attempt::Failure(error)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// assert!(Attempt::success(1).is_success());
    /// ```
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Attempt::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// assert!(Attempt::<()>::failure(Error::msg("x")).is_failure());
    /// ```
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Attempt::Failure(_))
    }

    /// Borrow the value, if this is a `Success`.
    #[inline]
    pub fn success_ref(&self) -> Option<&T> {
        match self {
            Attempt::Success(value) => Some(value),
            Attempt::Failure(_) => None,
        }
    }

    /// Borrow the error, if this is a `Failure`.
    #[inline]
    pub fn failure_ref(&self) -> Option<&Error> {
        match self {
            Attempt::Success(_) => None,
            Attempt::Failure(error) => Some(error),
        }
    }

    // ========== Extractors ==========

    /// Extract the value, or report the captured error.
    ///
    /// A caller that skips recovery still sees the original failure: it is the
    /// [`cause`](NonFatal::cause) of the returned [`NonFatal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// assert_eq!(Attempt::success(3).get().unwrap(), 3);
    ///
    /// let failed: Attempt<i32> = Attempt::failure(Error::msg("no route to host"));
    /// let err = failed.get().unwrap_err();
    /// assert_eq!(err.cause().to_string(), "no route to host");
    /// ```
    pub fn get(self) -> Result<T, NonFatal> {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %error, "extracting value from failure");
                Err(NonFatal::new(error))
            }
        }
    }

    /// Return the value, or `fallback` on failure.
    ///
    /// `fallback` is evaluated eagerly; use [`get_or_else`](Self::get_or_else) to
    /// compute it only when needed.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// assert_eq!(Attempt::success(5).get_or(0), 5);
    /// assert_eq!(Attempt::failure(Error::msg("x")).get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, fallback: T) -> T {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(_) => fallback,
        }
    }

    /// Return the value, or compute one from the error.
    ///
    /// `f` runs only on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// let failed: Attempt<usize> = Attempt::failure(Error::msg("four"));
    /// assert_eq!(failed.get_or_else(|e| e.to_string().len()), 4);
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(error) => f(error),
        }
    }

    /// Return the value, or translate the error into one of the caller's choosing.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum ConfigError {
    ///     BadPort(String),
    /// }
    ///
    /// let port = Attempt::of(|| "http".parse::<u16>())
    ///     .get_or_err(|e| ConfigError::BadPort(e.to_string()));
    ///
    /// assert!(matches!(port, Err(ConfigError::BadPort(_))));
    /// ```
    pub fn get_or_err<X, F>(self, provider: F) -> Result<T, X>
    where
        F: FnOnce(Error) -> X,
    {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %error, "translating failure at boundary");
                Err(provider(error))
            }
        }
    }

    /// Invert the attempt, exposing the error as the success value.
    ///
    /// A `Success` becomes a `Failure` holding [`NotFailed`].
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    /// use attempt::error::NotFailed;
    ///
    /// let failed: Attempt<i32> = Attempt::failure(Error::msg("boom"));
    /// assert_eq!(failed.failed().get().unwrap().to_string(), "boom");
    ///
    /// let inverted = Attempt::success(1).failed();
    /// assert!(inverted.failure_ref().unwrap().is::<NotFailed>());
    /// ```
    pub fn failed(self) -> Attempt<Error> {
        match self {
            Attempt::Success(_) => Attempt::Failure(Error::from(NotFailed)),
            Attempt::Failure(error) => Attempt::Success(error),
        }
    }

    /// Fold both variants into a single value.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// let describe = |a: Attempt<i32>| a.fold(|e| format!("error: {}", e), |v| format!("value: {}", v));
    ///
    /// assert_eq!(describe(Attempt::success(7)), "value: 7");
    /// assert_eq!(describe(Attempt::failure(Error::msg("boom"))), "error: boom");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_failure: F, on_success: G) -> R
    where
        F: FnOnce(Error) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Attempt::Success(value) => on_success(value),
            Attempt::Failure(error) => on_failure(error),
        }
    }

    /// Convert into a `Result`, keeping the error.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(error) => Err(error),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value.
    ///
    /// A non-fatal panic in `f` becomes a `Failure`. On a `Failure`, `f` is never
    /// called and the failure is returned unchanged.
    ///
    /// # Panics
    ///
    /// Unwinds if `f` panics with a fatal payload.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// assert_eq!(Attempt::success(42).map(|x| x + 1).get().unwrap(), 43);
    ///
    /// let failed: Attempt<i32> = Attempt::failure(Error::msg("boom"));
    /// assert!(failed.map(|x| x + 1).is_failure());
    /// ```
    pub fn map<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Attempt::Success(value) => Attempt::from_fn(|| f(value)),
            Attempt::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Chain a computation that itself produces an attempt.
    ///
    /// The attempt returned by `f` is the result, never wrapped twice. A non-fatal
    /// panic in `f` becomes a `Failure`; on a `Failure`, `f` is never called.
    ///
    /// # Panics
    ///
    /// Unwinds if `f` panics with a fatal payload.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// let parse = |s: &str| Attempt::of(|| s.parse::<i32>());
    ///
    /// let total = Attempt::success("20")
    ///     .flat_map(parse)
    ///     .flat_map(|a| parse("22").map(|b| a + b));
    ///
    /// assert_eq!(total.get().unwrap(), 42);
    /// ```
    pub fn flat_map<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        match self {
            Attempt::Success(value) => match catching(|| f(value)) {
                Ok(attempt) => attempt,
                Err(error) => Attempt::captured(error),
            },
            Attempt::Failure(error) => Attempt::Failure(error),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        self.flat_map(f)
    }

    /// Keep the success value only if `predicate` holds.
    ///
    /// A rejected value becomes a `Failure` holding [`PredicateMismatch`]. A non-fatal
    /// panic in `predicate` becomes a `Failure`; on a `Failure`, `predicate` is never
    /// called.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    /// use attempt::error::PredicateMismatch;
    ///
    /// assert!(Attempt::success(4).filter(|n| n % 2 == 0).is_success());
    ///
    /// let odd = Attempt::success(3).filter(|n| n % 2 == 0);
    /// assert!(odd.failure_ref().unwrap().is::<PredicateMismatch>());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Attempt::Success(value) => match catching(|| predicate(&value)) {
                Ok(true) => Attempt::Success(value),
                Ok(false) => Attempt::Failure(Error::from(PredicateMismatch)),
                Err(error) => Attempt::captured(error),
            },
            failure @ Attempt::Failure(_) => failure,
        }
    }

    /// Run `action` on the success value; do nothing on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// let mut seen = Vec::new();
    /// Attempt::success(3).for_each(|v| seen.push(*v));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Attempt::Success(value) = self {
            action(value);
        }
    }

    /// Observe the success value and pass the attempt through.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.for_each(f);
        self
    }

    /// Observe the error and pass the attempt through.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Attempt::Failure(error) = &self {
            f(error);
        }
        self
    }

    // ========== Recovery ==========

    /// Replace a failure with a value computed from its error.
    ///
    /// A `Success` is returned unchanged and `f` is not called. A non-fatal panic in
    /// `f` becomes a new `Failure`.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// let failed: Attempt<i32> = Attempt::failure(Error::msg("boom"));
    /// assert_eq!(failed.recover(|_| -1).get().unwrap(), -1);
    ///
    /// assert_eq!(Attempt::success(5).recover(|_| -1).get().unwrap(), 5);
    /// ```
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            success @ Attempt::Success(_) => success,
            Attempt::Failure(error) => Attempt::from_fn(|| f(error)),
        }
    }

    /// Replace a failure with the attempt computed from its error.
    ///
    /// Recovery may itself fail, possibly with a different error.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// let primary: Attempt<u16> = Attempt::failure(Error::msg("primary down"));
    /// let port = primary.recover_with(|_| Attempt::of(|| "8443".parse::<u16>()));
    /// assert_eq!(port.get().unwrap(), 8443);
    /// ```
    pub fn recover_with<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Attempt<T>,
    {
        match self {
            success @ Attempt::Success(_) => success,
            Attempt::Failure(error) => match catching(|| f(error)) {
                Ok(attempt) => attempt,
                Err(error) => Attempt::captured(error),
            },
        }
    }

    // ========== Conversions ==========

    /// Convert into an `Option`, discarding the error.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::{Attempt, Error};
    ///
    /// assert_eq!(Attempt::success(1).to_option(), Some(1));
    /// assert_eq!(Attempt::<i32>::failure(Error::msg("x")).to_option(), None);
    /// ```
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Attempt::Success(value) => Some(value),
            Attempt::Failure(_) => None,
        }
    }

    /// Iterate over the success value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.success_ref().into_iter()
    }

    // ========== Dispatch ==========

    /// Hand this attempt, unchanged, to an external matcher and return its result.
    ///
    /// Any `FnOnce(Attempt<T>) -> R` is a matcher; [`Cases`](crate::matcher::Cases)
    /// dispatches on the variant.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    /// use attempt::matcher::Cases;
    ///
    /// let status = Attempt::success(200).match_with(Cases::new(
    ///     |code| format!("ok {}", code),
    ///     |err| format!("failed: {}", err),
    /// ));
    /// assert_eq!(status, "ok 200");
    /// ```
    #[inline]
    pub fn match_with<M>(self, matcher: M) -> M::Output
    where
        M: Matcher<T>,
    {
        matcher.apply(self)
    }
}

impl<T> Attempt<Attempt<T>> {
    /// Flatten a nested attempt.
    ///
    /// # Example
    ///
    /// ```
    /// use attempt::Attempt;
    ///
    /// let nested = Attempt::success(Attempt::success(1));
    /// assert_eq!(nested.flatten().get().unwrap(), 1);
    /// ```
    #[inline]
    pub fn flatten(self) -> Attempt<T> {
        match self {
            Attempt::Success(inner) => inner,
            Attempt::Failure(error) => Attempt::Failure(error),
        }
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: Into<Error>,
{
    /// Same as [`Attempt::from_result`].
    ///
    /// # Panics
    ///
    /// Unwinds with the error as payload when the `Err` value is fatal, so a fatal
    /// error is never turned into a `Failure` by a conversion.
    fn from(result: Result<T, E>) -> Self {
        Attempt::from_result(result)
    }
}

impl<T> From<Attempt<T>> for Result<T, Error> {
    fn from(attempt: Attempt<T>) -> Self {
        attempt.into_result()
    }
}

impl<T> IntoIterator for Attempt<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Attempt<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.success_ref().into_iter()
    }
}
