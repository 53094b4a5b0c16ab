//! Pattern dispatch over an `Attempt`
//!
//! [`Attempt::match_with`] hands the attempt to a [`Matcher`] and returns whatever the
//! matcher produces. The attempt imposes nothing on the matcher beyond accepting it:
//! any `FnOnce(Attempt<T>) -> R` qualifies, and [`Cases`] is a ready-made two-armed
//! dispatcher.
//!
//! # Examples
//!
//! ```
//! use attempt::Attempt;
//! use attempt::matcher::{Cases, Matcher};
//!
//! struct HttpStatus;
//!
//! impl Matcher<u16> for HttpStatus {
//!     type Output = &'static str;
//!
//!     fn apply(self, attempt: Attempt<u16>) -> Self::Output {
//!         match attempt {
//!             Attempt::Success(200) => "ok",
//!             Attempt::Success(_) => "unexpected",
//!             Attempt::Failure(_) => "unreachable",
//!         }
//!     }
//! }
//!
//! assert_eq!(Attempt::success(200).match_with(HttpStatus), "ok");
//!
//! let len = Attempt::success("abc").match_with(Cases::new(|s: &str| s.len(), |_| 0));
//! assert_eq!(len, 3);
//! ```

use std::fmt;

use crate::{Attempt, Error};

/// Case analysis over an [`Attempt`].
pub trait Matcher<T> {
    /// What the matcher produces.
    type Output;

    /// Consume the attempt and produce a result.
    fn apply(self, attempt: Attempt<T>) -> Self::Output;
}

impl<T, R, F> Matcher<T> for F
where
    F: FnOnce(Attempt<T>) -> R,
{
    type Output = R;

    fn apply(self, attempt: Attempt<T>) -> R {
        self(attempt)
    }
}

/// A matcher with one arm per variant.
///
/// # Example
///
/// ```
/// use attempt::{Attempt, Error};
/// use attempt::matcher::Cases;
///
/// let cases = || Cases::new(|v: i32| v.to_string(), |e: Error| format!("<{}>", e));
///
/// assert_eq!(Attempt::success(1).match_with(cases()), "1");
/// assert_eq!(Attempt::failure(Error::msg("boom")).match_with(cases()), "<boom>");
/// ```
pub struct Cases<S, F> {
    on_success: S,
    on_failure: F,
}

impl<S, F> Cases<S, F> {
    /// Build a matcher from the success arm and the failure arm.
    pub fn new(on_success: S, on_failure: F) -> Self {
        Cases {
            on_success,
            on_failure,
        }
    }
}

impl<T, R, S, F> Matcher<T> for Cases<S, F>
where
    S: FnOnce(T) -> R,
    F: FnOnce(Error) -> R,
{
    type Output = R;

    fn apply(self, attempt: Attempt<T>) -> R {
        attempt.fold(self.on_failure, self.on_success)
    }
}

impl<S, F> fmt::Debug for Cases<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cases").finish_non_exhaustive()
    }
}
