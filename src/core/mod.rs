//! Core types shared by the machine and its tooling.
//!
//! - Step labels via the `Label` bound
//! - Immutable run traces
//!
//! Nothing in this module performs I/O.

mod label;
mod trace;

pub use label::Label;
pub use trace::{RunTrace, StepTransition};
