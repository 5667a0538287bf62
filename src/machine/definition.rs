//! Validated machine definitions.

use crate::core::Label;
use crate::machine::error::BuildError;
use crate::machine::step::{Step, Vertices};
use crate::outcome::Outcome;
use std::fmt;

/// A validated, immutable set of named steps plus the label to start from.
///
/// The first step is checked exactly once, in [`Machine::build`]; running a
/// machine never mutates it, so one definition can serve any number of runs.
///
/// # Example
///
/// ```rust
/// use waypoint::machine::{continue_to, halt_with, step, Machine};
/// use waypoint::Outcome;
///
/// let machine = Machine::build(
///     [
///         ("double", step(|n: u32| continue_to("check", n * 2))),
///         ("check", step(|n: u32| if n < 100 { continue_to("double", n) } else { halt_with(n) })),
///     ],
///     "double",
/// )
/// .with_default_else(|e| panic!("{e}"));
///
/// assert_eq!(machine.run(3), Outcome::ok(192));
/// ```
pub struct Machine<L: Label, S> {
    name: Option<String>,
    vertices: Vertices<L, S>,
    first_step: L,
}

impl<L: Label, S> Machine<L, S> {
    /// Build a machine from `(label, step)` pairs and the first label.
    ///
    /// Later pairs replace earlier ones with the same label. Fails with
    /// `InvalidFirstStep` when `first_step` has no step.
    pub fn build<I>(vertices: I, first_step: L) -> Outcome<BuildError<L>, Self>
    where
        I: IntoIterator<Item = (L, Step<L, S>)>,
    {
        let vertices: Vertices<L, S> = vertices.into_iter().collect();

        Outcome::ok(vertices)
            .keep_if(
                |v| v.contains_key(&first_step),
                BuildError::InvalidFirstStep(first_step.clone()),
            )
            .map(|vertices| Self {
                name: None,
                vertices,
                first_step,
            })
            .tap_error(|e| tracing::debug!(error = %e, "machine construction rejected"))
    }

    /// Fail-fast variant of [`build`](Self::build).
    ///
    /// # Panics
    ///
    /// Panics when `first_step` has no step.
    pub fn build_or_panic<I>(vertices: I, first_step: L) -> Self
    where
        I: IntoIterator<Item = (L, Step<L, S>)>,
    {
        Self::build(vertices, first_step).with_default_else(|e| panic!("invalid machine: {e}"))
    }

    /// Attach a name used in log spans.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn first_step(&self) -> &L {
        &self.first_step
    }

    pub fn contains(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    /// Labels with a step, in no particular order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.vertices.keys()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Labels from `expected` that have no step, in the order given.
    ///
    /// Useful with closed label sets to check a machine covers all of them.
    pub fn missing_steps(&self, expected: &[L]) -> Vec<L> {
        expected
            .iter()
            .filter(|label| !self.contains(label))
            .cloned()
            .collect()
    }

    /// Assemble a machine whose first step was already checked by the caller.
    pub(crate) fn from_validated(
        name: Option<String>,
        vertices: Vertices<L, S>,
        first_step: L,
    ) -> Self {
        debug_assert!(vertices.contains_key(&first_step));
        Self {
            name,
            vertices,
            first_step,
        }
    }

    pub(crate) fn vertex(&self, label: &L) -> Option<&Step<L, S>> {
        self.vertices.get(label)
    }
}

impl<L: Label, S> Clone for Machine<L, S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            vertices: self.vertices.clone(),
            first_step: self.first_step.clone(),
        }
    }
}

impl<L: Label, S> fmt::Debug for Machine<L, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("name", &self.name)
            .field("first_step", &self.first_step)
            .field("steps", &self.vertices.keys().collect::<Vec<_>>())
            .finish()
    }
}
