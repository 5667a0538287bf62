//! Macros for ergonomic machine construction.

/// Declare a closed set of step labels.
///
/// The generated enum derives everything a [`Label`](crate::core::Label)
/// needs, plus `ALL` (every variant, in declaration order), `name()` and
/// `Display`. Pair `ALL` with
/// [`MachineBuilder::require_all`](crate::builder::MachineBuilder::require_all)
/// to check a machine defines every label.
///
/// # Example
///
/// ```
/// use waypoint::step_labels;
///
/// step_labels! {
///     pub enum Checkout {
///         Validate,
///         Charge,
///         Ship,
///     }
/// }
///
/// assert_eq!(Checkout::ALL.len(), 3);
/// assert_eq!(Checkout::Charge.name(), "Charge");
/// assert_eq!(Checkout::Ship.to_string(), "Ship");
/// ```
#[macro_export]
macro_rules! step_labels {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every label, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::{finish, goto, MachineBuilder};
    use crate::machine::BuildError;
    use crate::outcome::Outcome;

    step_labels! {
        enum TestStep {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn step_labels_macro_generates_helpers() {
        assert_eq!(
            TestStep::ALL,
            &[TestStep::Initial, TestStep::Processing, TestStep::Complete]
        );
        assert_eq!(TestStep::Processing.name(), "Processing");
        assert_eq!(format!("{}", TestStep::Complete), "Complete");
    }

    #[test]
    fn step_labels_supports_visibility_and_attributes() {
        step_labels! {
            /// Labels for a public workflow.
            pub enum PublicStep {
                /// The only step.
                Only,
            }
        }

        assert_eq!(PublicStep::ALL.len(), 1);
        assert_eq!(PublicStep::Only.name(), "Only");
    }

    #[test]
    fn all_labels_drive_exhaustiveness_checks() {
        let incomplete = MachineBuilder::<TestStep, ()>::new()
            .first(TestStep::Initial)
            .add_step(TestStep::Initial, goto(TestStep::Complete))
            .add_step(TestStep::Complete, finish())
            .require_all(TestStep::ALL)
            .build();

        match incomplete {
            Outcome::Error(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors
                    .iter()
                    .any(|e| *e == BuildError::MissingStep(TestStep::Processing)));
            }
            Outcome::Ok(_) => panic!("Expected a missing step"),
        }
    }

    #[test]
    fn labels_serialize_by_name() {
        let json = serde_json::to_string(&TestStep::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");
    }
}
