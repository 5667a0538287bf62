//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder, ready-made steps for common
//! transitions, and the `step_labels!` macro for closed label sets.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;

use crate::core::Label;
use crate::machine::{continue_to, halt_with, step, Step};

/// A step that continues to `next` with the state unchanged.
///
/// # Example
///
/// ```
/// use waypoint::builder::{finish, goto, MachineBuilder};
/// use waypoint::Outcome;
///
/// let machine = MachineBuilder::new()
///     .first("start")
///     .add_step("start", goto("end"))
///     .add_step("end", finish())
///     .build_or_panic();
///
/// assert_eq!(machine.run(5), Outcome::ok(5));
/// ```
pub fn goto<L, S>(next: L) -> Step<L, S>
where
    L: Label,
    S: 'static,
{
    step(move |state| continue_to(next.clone(), state))
}

/// A step that halts with the state unchanged.
pub fn finish<L, S>() -> Step<L, S>
where
    L: Label,
    S: 'static,
{
    step(halt_with)
}

/// A step that continues to `if_true` when `predicate` holds for the state,
/// and to `if_false` otherwise.
///
/// # Example
///
/// ```
/// use waypoint::builder::{branch, finish, MachineBuilder};
/// use waypoint::machine::continue_to;
/// use waypoint::Outcome;
///
/// let machine = MachineBuilder::new()
///     .first("check")
///     .add_step("check", branch(|n: &u32| *n >= 10, "done", "grow"))
///     .step("grow", |n| continue_to("check", n * 3))
///     .add_step("done", finish())
///     .build_or_panic();
///
/// assert_eq!(machine.run(2), Outcome::ok(18));
/// ```
pub fn branch<L, S, P>(predicate: P, if_true: L, if_false: L) -> Step<L, S>
where
    L: Label,
    S: 'static,
    P: Fn(&S) -> bool + Send + Sync + 'static,
{
    step(move |state| {
        let next = if predicate(&state) {
            if_true.clone()
        } else {
            if_false.clone()
        };
        continue_to(next, state)
    })
}
