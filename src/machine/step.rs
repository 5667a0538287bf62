//! Step callbacks and their control protocol.

use std::collections::HashMap;
use std::sync::Arc;

/// Decision returned by a step callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome<L, S> {
    /// Dispatch `next` with the updated state.
    Continue { next: L, state: S },

    /// Stop the run; the state becomes the machine's result.
    Halt(S),
}

impl<L, S> StepOutcome<L, S> {
    pub fn is_halt(&self) -> bool {
        matches!(self, StepOutcome::Halt(_))
    }

    /// The state carried by either variant.
    pub fn state(&self) -> &S {
        match self {
            StepOutcome::Continue { state, .. } | StepOutcome::Halt(state) => state,
        }
    }
}

/// A step callback.
///
/// The signature itself is the shape check: a step takes exactly one state
/// value and returns a [`StepOutcome`]. Steps are shared, so a machine can be
/// cloned and run from several threads.
pub type Step<L, S> = Arc<dyn Fn(S) -> StepOutcome<L, S> + Send + Sync>;

/// Mapping from step label to callback.
pub type Vertices<L, S> = HashMap<L, Step<L, S>>;

/// Turn a closure into a [`Step`].
///
/// ```rust
/// use waypoint::machine::{halt_with, step, Step};
///
/// let done: Step<&str, u32> = step(|n| halt_with(n * 2));
/// assert_eq!(done(21), halt_with(42));
/// ```
pub fn step<L, S, F>(f: F) -> Step<L, S>
where
    F: Fn(S) -> StepOutcome<L, S> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Proceed to `label` with `state`.
pub fn continue_to<L, S>(label: L, state: S) -> StepOutcome<L, S> {
    StepOutcome::Continue { next: label, state }
}

/// Stop with `state` as the final value.
pub fn halt_with<L, S>(state: S) -> StepOutcome<L, S> {
    StepOutcome::Halt(state)
}
