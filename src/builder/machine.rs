//! Builder for constructing machines.

use crate::core::Label;
use crate::machine::{BuildError, Machine, Step, StepOutcome};
use crate::outcome::Outcome;
use std::collections::HashSet;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing machines with a fluent API.
///
/// Unlike [`Machine::build`], which only checks the first step, the builder
/// validates every rule and reports all violations at once.
pub struct MachineBuilder<L: Label, S> {
    name: Option<String>,
    first: Option<L>,
    steps: Vec<(L, Step<L, S>)>,
    required: Vec<L>,
}

impl<L: Label, S> MachineBuilder<L, S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            first: None,
            steps: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Name the machine for log spans (optional).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the first step (required).
    pub fn first(mut self, label: L) -> Self {
        self.first = Some(label);
        self
    }

    /// Add a step from a closure.
    pub fn step<F>(self, label: L, f: F) -> Self
    where
        F: Fn(S) -> StepOutcome<L, S> + Send + Sync + 'static,
    {
        self.add_step(label, Arc::new(f))
    }

    /// Add a pre-built step.
    pub fn add_step(mut self, label: L, step: Step<L, S>) -> Self {
        self.steps.push((label, step));
        self
    }

    /// Add multiple steps at once.
    pub fn steps(mut self, steps: Vec<(L, Step<L, S>)>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Require a step for every label in `labels`.
    pub fn require_all(mut self, labels: &[L]) -> Self {
        self.required.extend_from_slice(labels);
        self
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError<L>>> {
        self.checked_first().map(|_| ())
    }

    /// Run every check and yield the validated first step.
    fn checked_first(&self) -> Validation<L, NonEmptyVec<BuildError<L>>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError<L>>>> = Vec::new();
        let mut defined = HashSet::new();
        let mut reported = HashSet::new();

        if self.steps.is_empty() {
            checks.push(Validation::fail(BuildError::NoSteps));
        }

        for (label, _) in &self.steps {
            if !defined.insert(label) && reported.insert(label) {
                checks.push(Validation::fail(BuildError::DuplicateStep(label.clone())));
            }
        }

        for label in &self.required {
            if !defined.contains(label) {
                checks.push(Validation::fail(BuildError::MissingStep(label.clone())));
            }
        }

        let first_check = match &self.first {
            None => Validation::fail(BuildError::MissingFirstStep),
            Some(first) if !defined.contains(first) => {
                Validation::fail(BuildError::InvalidFirstStep(first.clone()))
            }
            Some(first) => Validation::success(first.clone()),
        };

        first_check
            .and(Validation::all_vec(checks))
            .map(|(first, _)| first)
    }

    /// Build the machine.
    /// Returns every violated rule if validation fails.
    pub fn build(self) -> Outcome<NonEmptyVec<BuildError<L>>, Machine<L, S>> {
        match self.checked_first() {
            Validation::Failure(errors) => {
                tracing::debug!(violations = errors.len(), "machine builder rejected");
                Outcome::error(errors)
            }
            Validation::Success(first) => Outcome::ok(Machine::from_validated(
                self.name,
                self.steps.into_iter().collect(),
                first,
            )),
        }
    }

    /// Fail-fast variant of [`build`](Self::build).
    ///
    /// # Panics
    ///
    /// Panics listing every violated rule.
    pub fn build_or_panic(self) -> Machine<L, S> {
        self.build().with_default_else(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            panic!("invalid machine: {}", messages.join("; "))
        })
    }
}

impl<L: Label, S> Default for MachineBuilder<L, S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{finish, goto};
    use crate::machine::{continue_to, halt_with};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestStep {
        Initial,
        Processing,
        Complete,
    }

    fn errors_of<S>(
        result: Outcome<NonEmptyVec<BuildError<TestStep>>, Machine<TestStep, S>>,
    ) -> Vec<BuildError<TestStep>> {
        match result {
            Outcome::Error(errors) => errors.iter().cloned().collect(),
            Outcome::Ok(_) => panic!("Expected build errors, got a machine"),
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let errors = errors_of(MachineBuilder::<TestStep, u32>::new().build());

        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&BuildError::NoSteps));
        assert!(errors.contains(&BuildError::MissingFirstStep));
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let result = MachineBuilder::<TestStep, u32>::new()
            .first(TestStep::Initial)
            .step(TestStep::Processing, |n| continue_to(TestStep::Complete, n))
            .step(TestStep::Processing, |n| halt_with(n))
            .step(TestStep::Processing, |n| halt_with(n))
            .require_all(&[TestStep::Initial, TestStep::Processing, TestStep::Complete])
            .build();

        let errors = errors_of(result);

        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&BuildError::DuplicateStep(TestStep::Processing)));
        assert!(errors.contains(&BuildError::InvalidFirstStep(TestStep::Initial)));
        assert!(errors.contains(&BuildError::MissingStep(TestStep::Initial)));
        assert!(errors.contains(&BuildError::MissingStep(TestStep::Complete)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .name("fluent")
            .first(TestStep::Initial)
            .add_step(TestStep::Initial, goto(TestStep::Processing))
            .step(TestStep::Processing, |n: u32| continue_to(TestStep::Complete, n + 1))
            .add_step(TestStep::Complete, finish())
            .require_all(&[TestStep::Initial, TestStep::Processing, TestStep::Complete])
            .build();

        assert!(machine.is_ok());
        let machine = machine.with_default_else(|_| panic!("Expected a machine"));
        assert_eq!(machine.name(), Some("fluent"));
        assert_eq!(machine.run(1), Outcome::ok(2));
    }

    #[test]
    fn add_multiple_steps() {
        let steps: Vec<(TestStep, Step<TestStep, u32>)> = vec![
            (TestStep::Initial, goto(TestStep::Complete)),
            (TestStep::Complete, finish()),
        ];

        let machine = MachineBuilder::new()
            .first(TestStep::Initial)
            .steps(steps)
            .build();

        assert!(machine.is_ok());
    }

    #[test]
    fn validate_does_not_consume_builder() {
        let builder = MachineBuilder::<TestStep, u32>::new()
            .first(TestStep::Initial)
            .add_step(TestStep::Initial, finish());

        assert!(builder.validate().is_success());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn missing_first_step_is_reported_alone() {
        let errors = errors_of(
            MachineBuilder::<TestStep, u32>::new()
                .add_step(TestStep::Initial, finish())
                .build(),
        );

        assert_eq!(errors, vec![BuildError::MissingFirstStep]);
    }

    #[test]
    fn first_step_errors_accumulate_with_other_rules() {
        let errors = errors_of(
            MachineBuilder::<TestStep, u32>::new()
                .first(TestStep::Complete)
                .add_step(TestStep::Initial, finish())
                .require_all(&[TestStep::Processing])
                .build(),
        );

        assert_eq!(
            errors,
            vec![
                BuildError::InvalidFirstStep(TestStep::Complete),
                BuildError::MissingStep(TestStep::Processing),
            ]
        );
    }

    #[test]
    fn build_or_panic_lists_violations() {
        let result = std::panic::catch_unwind(|| {
            MachineBuilder::<TestStep, u32>::new().build_or_panic()
        });

        assert!(result.is_err());
    }
}
