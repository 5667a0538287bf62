//! Counter Loop
//!
//! A single step that continues to itself until a threshold is reached.
//!
//! Key concepts:
//! - Steps are plain closures over the state
//! - Self-loops run iteratively, so a million iterations need no stack
//! - `run_traced` records every transition of a run
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example counter_loop

use tracing_subscriber::EnvFilter;
use waypoint::machine::{continue_to, halt_with, step, Machine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Loop Example ===\n");

    let counter = Machine::build_or_panic(
        [(
            "count",
            step(|n: u64| {
                if n < 10 {
                    continue_to("count", n + 1)
                } else {
                    halt_with(n)
                }
            }),
        )],
        "count",
    )
    .named("counter");

    let (outcome, trace) = counter.run_traced(0);
    println!("Counted to: {:?}", outcome.ok_value());
    println!("Transitions recorded: {}", trace.len());
    println!("Visits to 'count': {}", trace.visits(&"count"));
    println!("Run id: {}", trace.run_id());

    let long = Machine::build_or_panic(
        [(
            "spin",
            step(|n: u64| {
                if n < 1_000_000 {
                    continue_to("spin", n + 1)
                } else {
                    halt_with(n)
                }
            }),
        )],
        "spin",
    );
    println!("\nA million iterations: {:?}", long.run(0).ok_value());

    println!("\n=== Example Complete ===");
}
