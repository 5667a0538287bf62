//! Errors raised while building and running machines.

use thiserror::Error;

/// Errors that can occur when constructing a machine.
///
/// [`Machine::build`](crate::machine::Machine::build) only produces
/// `InvalidFirstStep`; the other variants come from the fluent
/// [`MachineBuilder`](crate::builder::MachineBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<L> {
    #[error("First step {0:?} is not a step of the machine")]
    InvalidFirstStep(L),

    #[error("First step not specified. Call .first(label) before .build()")]
    MissingFirstStep,

    #[error("No steps defined. Add at least one step")]
    NoSteps,

    #[error("Step {0:?} is registered more than once")]
    DuplicateStep(L),

    #[error("Step {0:?} is required but has no callback")]
    MissingStep(L),
}

/// Errors that stop a running machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError<L, S> {
    /// A step returned `Continue` naming a label with no callback.
    /// Carries the state at the time of failure.
    #[error("Step {label:?} is not defined in the machine")]
    InvalidStep { label: L, state: S },
}
