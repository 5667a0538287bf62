//! Embeddable step machine.
//!
//! A machine is a set of named steps plus the label to start from. Running
//! it dispatches the current label's step with the current state and
//! follows the step's decision until one of them halts.
//!
//! # Key Concepts
//!
//! - **Steps**: single-argument callbacks returning a [`StepOutcome`]
//! - **Machine**: validated once at construction, immutable afterwards
//! - **Runs**: an iterative loop with two exits, halt (`Ok`) or a missing
//!   step (`Error`)
//!
//! Retries are expressed by a step continuing back to itself or to an
//! earlier label; the machine has no retry policy of its own.

mod definition;
mod error;
mod runner;
mod step;

pub use definition::Machine;
pub use error::{BuildError, RunError};
pub use step::{continue_to, halt_with, step, Step, StepOutcome, Vertices};

use crate::core::Label;
use crate::outcome::Outcome;

/// Build a machine; see [`Machine::build`].
pub fn build<L, S, I>(vertices: I, first_step: L) -> Outcome<BuildError<L>, Machine<L, S>>
where
    L: Label,
    I: IntoIterator<Item = (L, Step<L, S>)>,
{
    Machine::build(vertices, first_step)
}

/// Run `machine` from its first step; see [`Machine::run`].
pub fn run<L: Label, S>(initial_state: S, machine: &Machine<L, S>) -> Outcome<RunError<L, S>, S> {
    machine.run(initial_state)
}
