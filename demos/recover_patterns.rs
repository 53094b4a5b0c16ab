//! Recover Patterns Example
//!
//! Demonstrates recovery patterns for `Attempt`-based computations:
//! - recover for fallback values
//! - recover_with for fallbacks that can themselves fail
//! - choosing a recovery by error type
//! - translating errors at an API boundary
//! - fatal errors that are never recovered

use std::io;
use std::panic;

use attempt::error::PredicateMismatch;
use attempt::prelude::*;

// ==================== Basic Recover ====================

/// Example 1: Replace a failure with a default value
fn example_basic_recover() {
    println!("\n=== Example 1: Basic Recover ===");

    let workers = Attempt::of(|| "many".parse::<usize>())
        .inspect_err(|e| println!("  Could not parse worker count: {}", e))
        .recover(|_| 4);

    println!("Workers: {}", workers.get_or(1));
}

// ==================== Recover With ====================

/// Example 2: Fall back to a second source that may also fail
fn example_recover_with() {
    println!("\n=== Example 2: Recover With ===");

    fn read_cache(key: &str) -> Attempt<String> {
        println!("  Trying cache for key: {}", key);
        Attempt::of(|| Err(io::Error::new(io::ErrorKind::NotFound, "cache miss")))
    }

    fn read_db(key: &str) -> Attempt<String> {
        println!("  Fetching from database for key: {}", key);
        Attempt::success(format!("value for {}", key))
    }

    let value = read_cache("user:123").recover_with(|_| read_db("user:123"));

    match value.get() {
        Ok(value) => println!("Success: {}", value),
        Err(e) => println!("Error: {}", e),
    }
}

// ==================== Recover By Error Type ====================

/// Example 3: Recover only from the errors you understand
fn example_selective_recover() {
    println!("\n=== Example 3: Selective Recover ===");

    fn timeout_ms(raw: &str) -> Attempt<u64> {
        Attempt::of(|| raw.parse::<u64>())
            .filter(|ms| *ms <= 60_000)
            .recover_with(|e| {
                if e.is::<PredicateMismatch>() {
                    println!("  Timeout {} too large, clamping", raw);
                    Attempt::success(60_000)
                } else {
                    Attempt::failure(e)
                }
            })
    }

    for raw in ["1500", "900000", "soon"] {
        let described = timeout_ms(raw).fold(
            |e| format!("invalid ({})", e),
            |ms| format!("{} ms", ms),
        );
        println!("{:>8} -> {}", raw, described);
    }
}

// ==================== Boundary Translation ====================

/// Example 4: Translate captured errors into a domain error
fn example_boundary() {
    println!("\n=== Example 4: Boundary Translation ===");

    #[derive(Debug)]
    enum ApiError {
        BadRequest(String),
    }

    let port: Result<u16, ApiError> = Attempt::of(|| "http".parse::<u16>())
        .get_or_err(|e| ApiError::BadRequest(format!("port: {}", e)));

    match port {
        Ok(port) => println!("Port: {}", port),
        Err(ApiError::BadRequest(msg)) => println!("Bad request: {}", msg),
    }
}

// ==================== Fatal Errors ====================

/// Example 5: Fatal errors escape instead of becoming a Failure
fn example_fatal() {
    println!("\n=== Example 5: Fatal Errors ===");

    let outcome = panic::catch_unwind(|| {
        Attempt::<()>::of(|| Err(Fatal::Interrupted)).recover(|_| ())
    });

    match outcome {
        Ok(_) => println!("Unexpected: fatal error was captured"),
        Err(_) => println!("Interrupted signal propagated past the attempt"),
    }
}

fn main() {
    println!("Recover Patterns Examples");
    println!("=========================");

    example_basic_recover();
    example_recover_with();
    example_selective_recover();
    example_boundary();
    example_fatal();

    println!("\n=== All examples completed successfully! ===");
}
