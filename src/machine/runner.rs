//! The dispatch loop.
//!
//! Runs are a plain `loop`: each transition replaces the current label and
//! state in place, so arbitrarily long or cyclic workflows run in constant
//! stack space.

use crate::core::{Label, RunTrace, StepTransition};
use crate::machine::definition::Machine;
use crate::machine::error::RunError;
use crate::machine::step::StepOutcome;
use crate::outcome::Outcome;
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

impl<L: Label, S> Machine<L, S> {
    /// Run the machine from its first step with `initial` state.
    ///
    /// Returns `Ok(final_state)` when a step halts, or
    /// `Error(RunError::InvalidStep { .. })` when a step continues to a label
    /// with no callback. There is no step budget: a machine whose steps
    /// never halt runs forever.
    pub fn run(&self, initial: S) -> Outcome<RunError<L, S>, S> {
        self.dispatch(initial, None, |_, _| {})
    }

    /// Run the machine and record every transition it dispatched.
    pub fn run_traced(&self, initial: S) -> (Outcome<RunError<L, S>, S>, RunTrace<L>) {
        let trace = RunTrace::new(self.first_step().clone());
        let mut visits: HashMap<L, usize> = HashMap::from([(self.first_step().clone(), 1)]);
        let mut transitions = Vec::new();

        let outcome = self.dispatch(initial, Some(trace.run_id()), |from, to| {
            let visit = visits.entry(to.clone()).or_insert(0);
            *visit += 1;
            transitions.push(StepTransition {
                from: from.clone(),
                to: to.clone(),
                timestamp: Utc::now(),
                visit: *visit,
            });
        });

        let trace = transitions.into_iter().fold(trace, RunTrace::record);
        (outcome, trace)
    }

    /// Drive the loop. `on_transition` fires once the target of a
    /// `Continue` has resolved to a step, just before that step runs.
    fn dispatch<F>(
        &self,
        initial: S,
        run_id: Option<Uuid>,
        mut on_transition: F,
    ) -> Outcome<RunError<L, S>, S>
    where
        F: FnMut(&L, &L),
    {
        let span = tracing::debug_span!(
            "machine_run",
            machine = self.name().unwrap_or("anonymous"),
            run_id = tracing::field::Empty
        );
        if let Some(run_id) = run_id {
            span.record("run_id", tracing::field::display(run_id));
        }
        let _guard = span.enter();

        let mut label = self.first_step().clone();
        let mut previous: Option<L> = None;
        let mut state = initial;
        let mut transitions: u64 = 0;

        loop {
            let Some(step) = self.vertex(&label) else {
                tracing::warn!(step = ?label, transitions, "step not found, stopping run");
                return Outcome::error(RunError::InvalidStep { label, state });
            };

            if let Some(from) = previous.take() {
                on_transition(&from, &label);
            }

            tracing::trace!(step = ?label, "dispatching step");
            match step(state) {
                StepOutcome::Halt(final_state) => {
                    tracing::debug!(step = ?label, transitions, "machine halted");
                    return Outcome::ok(final_state);
                }
                StepOutcome::Continue {
                    next,
                    state: next_state,
                } => {
                    transitions += 1;
                    previous = Some(std::mem::replace(&mut label, next));
                    state = next_state;
                }
            }
        }
    }
}
