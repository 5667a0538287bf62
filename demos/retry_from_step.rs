//! Retry From Step
//!
//! Retries are plain backward jumps: a step continues to an earlier label
//! with an updated attempt count.
//!
//! Key concepts:
//! - Backward transitions for retry loops
//! - Giving up by halting with a failed state
//! - Reading the path from a run trace
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example retry_from_step

use tracing_subscriber::EnvFilter;
use waypoint::machine::{continue_to, halt_with, step, Machine};
use waypoint::Outcome;

const MAX_ATTEMPTS: u32 = 5;

#[derive(Clone, Debug)]
struct Upload {
    attempts: u32,
    succeeds_on: u32,
    done: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Retry From Step Example ===\n");

    let uploader = Machine::build_or_panic(
        [
            (
                "connect",
                step(|u: Upload| {
                    continue_to(
                        "send",
                        Upload {
                            attempts: u.attempts + 1,
                            ..u
                        },
                    )
                }),
            ),
            (
                "send",
                step(|u: Upload| {
                    if u.attempts >= u.succeeds_on {
                        halt_with(Upload { done: true, ..u })
                    } else if u.attempts < MAX_ATTEMPTS {
                        continue_to("connect", u)
                    } else {
                        halt_with(u)
                    }
                }),
            ),
        ],
        "connect",
    )
    .named("uploader");

    for succeeds_on in [1, 3, 9] {
        let initial = Upload {
            attempts: 0,
            succeeds_on,
            done: false,
        };
        let (outcome, trace) = uploader.run_traced(initial);

        let summary: Outcome<String, u32> = outcome
            .map_error(|e| e.to_string())
            .keep_if(|u| u.done, "gave up".to_string())
            .map(|u| u.attempts);

        println!(
            "succeeds on {succeeds_on}: {} (path: {:?})",
            summary.either(|e| e, |n| format!("sent after {n} attempts")),
            trace.get_path()
        );
    }

    println!("\n=== Example Complete ===");
}
