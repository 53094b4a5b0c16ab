//! Demonstrates tracing integration with Attempt
//!
//! Run with: cargo run --example tracing_demo --features tracing

use attempt::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Captured errors are reported at debug level
    let retries = Attempt::of(|| "three".parse::<u32>()).recover(|_| 3);
    tracing::info!("Retries: {}", retries.get_or(0));

    // Boundary translation is reported at trace level
    let port = Attempt::of(|| "http".parse::<u16>()).get_or_err(|e| e.to_string());
    tracing::info!("Port: {:?}", port);

    // Fatal errors are reported at error level before they unwind
    let outcome = std::panic::catch_unwind(|| Attempt::<()>::of(|| Err(Fatal::Interrupted)));
    tracing::info!("Fatal error escaped: {}", outcome.is_err());
}
