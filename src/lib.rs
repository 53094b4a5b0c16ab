//! # Attempt
//!
//! A Rust library for treating failing computations as values.
//!
//! ## Philosophy
//!
//! An [`Attempt<T>`] is the resolved outcome of a computation that may fail:
//! `Success(T)` or `Failure(Error)`. Build one with [`Attempt::of`], then inspect,
//! transform, recover and convert it without branching at every step.
//!
//! Not every failure is yours to handle. Errors that mean the execution context is
//! compromised or was interrupted are **fatal**: they are never captured and keep
//! unwinding. See [`fatal`] for the exact list.
//!
//! ## Quick Example
//!
//! ```rust
//! use attempt::Attempt;
//!
//! fn parse_percent(input: &str) -> Attempt<u8> {
//!     Attempt::of(|| input.trim_end_matches('%').parse::<u8>())
//!         .filter(|p| *p <= 100)
//! }
//!
//! assert_eq!(parse_percent("42%").get().unwrap(), 42);
//! assert_eq!(parse_percent("142%").get_or(100), 100);
//! assert_eq!(parse_percent("lots").recover(|_| 0).get().unwrap(), 0);
//! ```
//!
//! ## Failure channels
//!
//! A computation fails by returning `Err` or by panicking. Both become a `Failure`
//! unless the error is fatal:
//!
//! ```rust
//! use attempt::Attempt;
//!
//! let divisor = std::hint::black_box(0);
//! let ratio = Attempt::from_fn(|| 1 / divisor);
//!
//! assert!(ratio.is_failure());
//! assert_eq!(ratio.recover(|_| -1).get().unwrap(), -1);
//! ```
//!
//! Panic capture relies on unwinding; with `panic = "abort"` a panic ends the process
//! as usual. A captured panic still runs the panic hook first, so the default hook
//! prints its message to stderr. Install a quieter hook with [`std::panic::set_hook`]
//! if captured panics are routine in your program.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when errors are captured or escape as fatal.
//! - `serde`: `Serialize` for `Attempt<T>`.
//! - `proptest`: `Arbitrary` for `Attempt<T>`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attempt;
pub mod error;
pub mod fatal;
pub mod matcher;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;

// Re-exports
pub use attempt::Attempt;
pub use error::{Error, NonFatal};
pub use fatal::{is_fatal, Fatal};
pub use matcher::{Cases, Matcher};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attempt::Attempt;
    pub use crate::error::{Error, NonFatal};
    pub use crate::fatal::Fatal;
    pub use crate::matcher::{Cases, Matcher};
}
