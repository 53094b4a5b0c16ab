//! Testing utilities for code that produces `Attempt`s
//!
//! Assertion macros that print the unexpected side on failure, plus (with the
//! `proptest` feature) an [`Arbitrary`](proptest::arbitrary::Arbitrary) impl for
//! [`Attempt`](crate::Attempt).
//!
//! # Examples
//!
//! ```rust
//! use attempt::{Attempt, Error, assert_success, assert_failure, assert_failure_is};
//! use attempt::error::PredicateMismatch;
//!
//! assert_success!(Attempt::success(42));
//! assert_failure!(Attempt::<i32>::failure(Error::msg("boom")));
//! assert_failure_is!(Attempt::success(1).filter(|n| *n > 1), PredicateMismatch);
//! ```

/// Assert that an attempt succeeded.
///
/// Evaluates to the success value.
///
/// # Example
///
/// ```rust
/// use attempt::{Attempt, assert_success};
///
/// let value = assert_success!(Attempt::success(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($attempt:expr) => {
        match $attempt {
            $crate::Attempt::Success(value) => value,
            $crate::Attempt::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an attempt failed.
///
/// Evaluates to the captured [`Error`](crate::Error).
///
/// # Example
///
/// ```rust
/// use attempt::{Attempt, Error, assert_failure};
///
/// let err = assert_failure!(Attempt::<i32>::failure(Error::msg("boom")));
/// assert_eq!(err.to_string(), "boom");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($attempt:expr) => {
        match $attempt {
            $crate::Attempt::Failure(e) => e,
            $crate::Attempt::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an attempt failed with an error of a given type.
///
/// Evaluates to the error, downcast to that type.
///
/// # Example
///
/// ```rust
/// use attempt::{Attempt, assert_failure_is};
///
/// let err = assert_failure_is!(Attempt::of(|| "x".parse::<i32>()), std::num::ParseIntError);
/// assert_eq!(err.to_string(), "invalid digit found in string");
/// ```
#[macro_export]
macro_rules! assert_failure_is {
    ($attempt:expr, $ty:ty) => {
        match $attempt {
            $crate::Attempt::Failure(e) => match e.downcast::<$ty>() {
                Ok(err) => err,
                Err(other) => panic!(
                    "Expected Failure with {}, got Failure: {:?}",
                    stringify!($ty),
                    other
                ),
            },
            $crate::Attempt::Success(v) => {
                panic!(
                    "Expected Failure with {}, got Success: {:?}",
                    stringify!($ty),
                    v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Attempt<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(crate::Attempt::success),
            "[a-z ]{1,24}".prop_map(|msg| crate::Attempt::failure(crate::Error::msg(msg))),
        ]
        .boxed()
    }
}
