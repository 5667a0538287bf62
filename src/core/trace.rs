//! Run traces.
//!
//! A [`RunTrace`] records the transitions a single machine run dispatched,
//! in order. Traces are diagnostic values; they are not used to resume runs.

use super::label::Label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single `Continue` transition.
///
/// `visit` counts how many times `to` has been entered during the run,
/// including this transition (the first step's initial dispatch counts as
/// its first visit).
///
/// # Example
///
/// ```rust
/// use waypoint::core::StepTransition;
/// use chrono::Utc;
///
/// let transition = StepTransition {
///     from: "validate",
///     to: "charge",
///     timestamp: Utc::now(),
///     visit: 1,
/// };
/// assert_eq!(transition.to, "charge");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepTransition<L> {
    /// The step that returned `Continue`
    pub from: L,
    /// The step named by `Continue`
    pub to: L,
    /// When the transition was dispatched
    pub timestamp: DateTime<Utc>,
    /// How many times `to` has been entered so far
    pub visit: usize,
}

/// Ordered record of one machine run.
///
/// `record` consumes the trace and returns the extended one, so a trace is
/// never observed half-updated.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{RunTrace, StepTransition};
/// use chrono::Utc;
///
/// let trace = RunTrace::new("fetch")
///     .record(StepTransition { from: "fetch", to: "parse", timestamp: Utc::now(), visit: 1 })
///     .record(StepTransition { from: "parse", to: "fetch", timestamp: Utc::now(), visit: 2 });
///
/// assert_eq!(trace.get_path(), vec![&"fetch", &"parse", &"fetch"]);
/// assert_eq!(trace.visits(&"fetch"), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunTrace<L> {
    run_id: Uuid,
    started_at: DateTime<Utc>,
    first_step: L,
    transitions: Vec<StepTransition<L>>,
}

impl<L: Label> RunTrace<L> {
    /// Start an empty trace for a run beginning at `first_step`.
    pub fn new(first_step: L) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            first_step,
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended trace.
    pub fn record(mut self, transition: StepTransition<L>) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Labels dispatched in order: the first step, then the target of each
    /// transition.
    pub fn get_path(&self) -> Vec<&L> {
        std::iter::once(&self.first_step)
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// How many times `label` was dispatched.
    pub fn visits(&self, label: &L) -> usize {
        self.get_path().into_iter().filter(|l| *l == label).count()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Time from the start of the run to the last transition.
    ///
    /// Returns `None` if no transition was recorded.
    pub fn duration(&self) -> Option<Duration> {
        self.transitions.last().and_then(|last| {
            last.timestamp
                .signed_duration_since(self.started_at)
                .to_std()
                .ok()
        })
    }

    pub fn transitions(&self) -> &[StepTransition<L>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(
        from: &'static str,
        to: &'static str,
        visit: usize,
    ) -> StepTransition<&'static str> {
        StepTransition {
            from,
            to,
            timestamp: Utc::now(),
            visit,
        }
    }

    #[test]
    fn new_trace_holds_only_first_step() {
        let trace = RunTrace::new("start");

        assert!(trace.is_empty());
        assert_eq!(trace.get_path(), vec![&"start"]);
        assert_eq!(trace.visits(&"start"), 1);
        assert!(trace.duration().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let trace = RunTrace::new("a")
            .record(transition("a", "b", 1))
            .record(transition("b", "c", 1));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get_path(), vec![&"a", &"b", &"c"]);
        assert_eq!(trace.transitions()[1].from, "b");
    }

    #[test]
    fn visits_counts_loops() {
        let trace = RunTrace::new("poll")
            .record(transition("poll", "poll", 2))
            .record(transition("poll", "poll", 3))
            .record(transition("poll", "done", 1));

        assert_eq!(trace.visits(&"poll"), 3);
        assert_eq!(trace.visits(&"done"), 1);
        assert_eq!(trace.visits(&"missing"), 0);
    }

    #[test]
    fn duration_is_measured_from_start() {
        let trace = RunTrace::new("a").record(transition("a", "b", 1));
        assert!(trace.duration().is_some());
    }

    #[test]
    fn trace_roundtrips_through_json() {
        let trace = RunTrace::new("a".to_string()).record(StepTransition {
            from: "a".to_string(),
            to: "b".to_string(),
            timestamp: Utc::now(),
            visit: 1,
        });

        let json = serde_json::to_string(&trace).unwrap();
        let back: RunTrace<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.run_id(), trace.run_id());
        assert_eq!(back.transitions(), trace.transitions());
    }
}
