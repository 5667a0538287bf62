//! Waypoint: composable outcomes and an embeddable step machine
//!
//! Waypoint structures fallible, multi-step computations without imperative
//! control flow. It has two layers:
//!
//! - **Outcome**: a success/failure container with short-circuiting
//!   combinators for sequencing, error transformation, defaulting and list
//!   aggregation
//! - **Machine**: named steps that jump forward or backward between each
//!   other until one halts, run by an iterative loop and producing an
//!   `Outcome`
//!
//! # Example
//!
//! ```rust
//! use waypoint::machine::{continue_to, halt_with, step, Machine, RunError};
//! use waypoint::Outcome;
//!
//! let counter = Machine::build(
//!     [(
//!         "count",
//!         step(|n: u32| if n < 10 { continue_to("count", n + 1) } else { halt_with(n) }),
//!     )],
//!     "count",
//! )
//! .with_default_else(|e| panic!("{e}"));
//!
//! let report = counter
//!     .run(0)
//!     .map(|n| format!("counted to {n}"))
//!     .either(|e: RunError<&str, u32>| e.to_string(), |msg| msg);
//!
//! assert_eq!(report, "counted to 10");
//! ```

pub mod api_key;
pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod outcome;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use core::{Label, RunTrace, StepTransition};
pub use machine::{continue_to, halt_with, BuildError, Machine, RunError, StepOutcome};
pub use outcome::{NoValue, Outcome};
