#![cfg(feature = "tracing")]

use std::panic;

use attempt::prelude::*;
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_capture_emits_debug_event() {
    let a = Attempt::of(|| "nine".parse::<u8>());
    assert!(a.is_failure());
    assert!(logs_contain("captured non-fatal error"));
    assert!(logs_contain("invalid digit found in string"));
}

#[test]
#[traced_test]
fn test_success_emits_nothing() {
    let a = Attempt::of(|| "9".parse::<u8>()).map(|n| n * 2);
    assert_eq!(a.get().unwrap(), 18);
    assert!(!logs_contain("captured non-fatal error"));
}

#[test]
#[traced_test]
fn test_fatal_propagation_emits_error_event() {
    let outcome = panic::catch_unwind(|| Attempt::<u8>::of(|| Err(Fatal::Interrupted)));
    assert!(outcome.is_err());
    assert!(logs_contain("fatal error escaped attempt"));
}

#[test]
#[traced_test]
fn test_boundary_translation_emits_trace_event() {
    let failed: Attempt<u8> = Attempt::failure(Error::msg("stale cache"));
    let _ = failed.get_or_err(|e| e.to_string());
    assert!(logs_contain("translating failure at boundary"));
}
