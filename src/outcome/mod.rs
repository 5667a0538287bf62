//! The `Outcome` success/failure algebra.
//!
//! Every fallible operation in this crate returns an [`Outcome`]. The
//! combinators below chain such operations without manual branching:
//! the first failure is preserved and no later step runs after it.
//!
//! # Example
//!
//! ```rust
//! use waypoint::Outcome;
//!
//! let parsed: Outcome<String, i32> = Outcome::ok("42")
//!     .and_then(|s: &str| match s.parse::<i32>() {
//!         Ok(n) => Outcome::ok(n),
//!         Err(e) => Outcome::error(e.to_string()),
//!     })
//!     .keep_if(|n| *n > 0, "must be positive".to_string());
//!
//! assert_eq!(parsed, Outcome::ok(42));
//! ```

mod collect;
mod combine;
mod wrap;

pub use collect::sequence;
pub use wrap::IntoOutcome;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel failure for an absent value.
///
/// Produced by [`Outcome::from_value`] and by the configuration reader when a
/// key or environment variable does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("no value")]
pub struct NoValue;

/// A success (`Ok`) or a failure (`Error`).
///
/// The error parameter comes first. Exactly one variant is populated.
#[must_use = "this `Outcome` may be an `Error` variant, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<E, T> {
    /// The computation succeeded with a value.
    Ok(T),
    /// The computation failed with a reason.
    Error(E),
}

impl<E, T> Outcome<E, T> {
    /// Construct a success.
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Construct a failure.
    pub fn error(reason: E) -> Self {
        Outcome::Error(reason)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Continue with `f` on success. `f` is never invoked on failure.
    pub fn and_then<T2, F>(self, f: F) -> Outcome<E, T2>
    where
        F: FnOnce(T) -> Outcome<E, T2>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Error(reason) => Outcome::Error(reason),
        }
    }

    /// Transform the success value, passing failures through untouched.
    pub fn map<T2, F>(self, f: F) -> Outcome<E, T2>
    where
        F: FnOnce(T) -> T2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Error(reason) => Outcome::Error(reason),
        }
    }

    /// Transform the failure reason, passing successes through untouched.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(reason) => Outcome::Error(f(reason)),
        }
    }

    /// Recover from a failure with `f`. `f` is never invoked on success.
    pub fn or_else<E2, F>(self, f: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> Outcome<E2, T>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(reason) => f(reason),
        }
    }

    /// Eliminate the outcome by applying exactly one branch.
    pub fn either<R, FE, FT>(self, on_error: FE, on_ok: FT) -> R
    where
        FE: FnOnce(E) -> R,
        FT: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Error(reason) => on_error(reason),
        }
    }

    /// Keep a success only if `predicate` holds, otherwise fail with
    /// `error_if_false`. The predicate does not run on failures.
    pub fn keep_if<P>(self, predicate: P, error_if_false: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Ok(value) if predicate(&value) => Outcome::Ok(value),
            Outcome::Ok(_) => Outcome::Error(error_if_false),
            Outcome::Error(reason) => Outcome::Error(reason),
        }
    }

    /// Negation of [`keep_if`](Self::keep_if): a success that satisfies
    /// `predicate` becomes `Error(error_if_true)`.
    pub fn reject_if<P>(self, predicate: P, error_if_true: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.keep_if(|value| !predicate(value), error_if_true)
    }

    /// Unwrap a success, or return `fallback` on failure.
    pub fn with_default(self, fallback: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(_) => fallback,
        }
    }

    /// Unwrap a success, or compute a fallback from the failure reason.
    pub fn with_default_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Error(reason) => fallback(reason),
        }
    }

    /// Run `f` on the success value for its side effect and return the
    /// outcome unchanged.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Run `f` on the failure reason for its side effect and return the
    /// outcome unchanged.
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Error(reason) = &self {
            f(reason);
        }
        self
    }

    /// Idempotent lift: an `Outcome` comes back unchanged, a `Result` is
    /// converted.
    ///
    /// Plain values are lifted with [`Outcome::ok`].
    pub fn wrap<V>(value: V) -> Self
    where
        V: IntoOutcome<E, T>,
    {
        value.into_outcome()
    }

    pub fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Error(reason) => Outcome::Error(reason),
        }
    }

    pub fn ok_value(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    pub fn error_value(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Error(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Promote an absent value into the algebra with a caller-chosen
    /// sentinel.
    pub fn from_value_or(value: Option<T>, default_error: E) -> Self {
        match value {
            Some(value) => Outcome::Ok(value),
            None => Outcome::Error(default_error),
        }
    }
}

impl<T> Outcome<NoValue, T> {
    /// Promote an absent value into the algebra: `None` becomes
    /// `Error(NoValue)`, anything else is a success.
    pub fn from_value(value: Option<T>) -> Self {
        Self::from_value_or(value, NoValue)
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(reason) => Outcome::Error(reason),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Error(reason) => Err(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn predicates_are_exclusive() {
        let ok: Outcome<&str, i32> = Outcome::ok(1);
        let err: Outcome<&str, i32> = Outcome::error("boom");

        assert!(ok.is_ok() && !ok.is_error());
        assert!(err.is_error() && !err.is_ok());
    }

    #[test]
    fn and_then_never_calls_f_on_error() {
        let called = Cell::new(false);
        let result: Outcome<&str, i32> = Outcome::<&str, i32>::error("first").and_then(|v| {
            called.set(true);
            Outcome::ok(v + 1)
        });

        assert_eq!(result, Outcome::error("first"));
        assert!(!called.get());
    }

    #[test]
    fn and_then_chains_successes() {
        let result: Outcome<&str, i32> = Outcome::ok(2)
            .and_then(|v| Outcome::ok(v * 10))
            .and_then(|v| Outcome::ok(v + 1));

        assert_eq!(result, Outcome::ok(21));
    }

    #[test]
    fn map_and_map_error_touch_one_side() {
        let ok: Outcome<&str, i32> = Outcome::ok(3);
        let err: Outcome<&str, i32> = Outcome::error("bad");

        assert_eq!(ok.map(|v| v * 2), Outcome::ok(6));
        assert_eq!(err.map(|v| v * 2), Outcome::error("bad"));
        assert_eq!(ok.map_error(str::len), Outcome::ok(3));
        assert_eq!(err.map_error(str::len), Outcome::error(3));
    }

    #[test]
    fn or_else_recovers_only_failures() {
        let called = Cell::new(false);
        let ok: Outcome<&str, i32> = Outcome::ok(1);
        let kept: Outcome<String, i32> = ok.or_else(|_| {
            called.set(true);
            Outcome::ok(0)
        });
        assert_eq!(kept, Outcome::ok(1));
        assert!(!called.get());

        let err: Outcome<&str, i32> = Outcome::error("missing");
        let recovered: Outcome<String, i32> =
            err.or_else(|reason| Outcome::error(reason.to_uppercase()));
        assert_eq!(recovered, Outcome::error("MISSING".to_string()));
    }

    #[test]
    fn either_applies_one_branch() {
        let ok: Outcome<&str, i32> = Outcome::ok(5);
        let err: Outcome<&str, i32> = Outcome::error("nope");

        assert_eq!(ok.either(|e| e.len() as i32, |v| v * 2), 10);
        assert_eq!(err.either(|e| e.len() as i32, |v| v * 2), 4);
    }

    #[test]
    fn keep_if_and_reject_if() {
        let even: Outcome<&str, i32> = Outcome::ok(4);

        assert_eq!(even.keep_if(|v| v % 2 == 0, "odd"), Outcome::ok(4));
        assert_eq!(even.reject_if(|v| v % 2 == 0, "even"), Outcome::error("even"));
        assert_eq!(
            Outcome::<&str, i32>::ok(3).keep_if(|v| v % 2 == 0, "odd"),
            Outcome::error("odd")
        );
    }

    #[test]
    fn keep_if_skips_predicate_on_error() {
        let called = Cell::new(false);
        let result = Outcome::<&str, i32>::error("earlier").keep_if(
            |_| {
                called.set(true);
                true
            },
            "later",
        );

        assert_eq!(result, Outcome::error("earlier"));
        assert!(!called.get());
    }

    #[test]
    fn with_default_unwraps_or_falls_back() {
        assert_eq!(Outcome::<&str, i32>::ok(7).with_default(0), 7);
        assert_eq!(Outcome::<&str, i32>::error("x").with_default(0), 0);
        assert_eq!(
            Outcome::<&str, usize>::error("four").with_default_else(str::len),
            4
        );
    }

    #[test]
    fn tap_observes_without_altering() {
        let seen = Cell::new(0);
        let ok = Outcome::<&str, i32>::ok(9).tap(|v| seen.set(*v));
        assert_eq!(ok, Outcome::ok(9));
        assert_eq!(seen.get(), 9);

        let err = Outcome::<&str, i32>::error("e").tap(|_| seen.set(-1));
        assert_eq!(err, Outcome::error("e"));
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn tap_error_observes_failures_only() {
        let seen = Cell::new("");
        let ok = Outcome::<&str, i32>::ok(1).tap_error(|e| seen.set(*e));
        assert_eq!(seen.get(), "");
        assert!(ok.is_ok());

        let err = Outcome::<&str, i32>::error("logged").tap_error(|e| seen.set(*e));
        assert_eq!(seen.get(), "logged");
        assert_eq!(err, Outcome::error("logged"));
    }

    #[test]
    fn from_value_promotes_absence() {
        assert_eq!(Outcome::from_value(Some(1)), Outcome::ok(1));
        assert_eq!(Outcome::<NoValue, i32>::from_value(None), Outcome::error(NoValue));
        assert_eq!(
            Outcome::from_value_or(None::<i32>, "absent"),
            Outcome::error("absent")
        );
    }

    #[test]
    fn result_conversions_round_trip_variants() {
        let outcome: Outcome<String, i32> = Ok::<i32, String>(1).into();
        assert_eq!(outcome, Outcome::ok(1));

        let result: Result<i32, &str> = Outcome::<&str, i32>::error("e").into_result();
        assert_eq!(result, Err("e"));
    }

    #[test]
    fn serializes_with_variant_tags() {
        let ok: Outcome<String, i32> = Outcome::ok(1);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"Ok":1}"#);

        let back: Outcome<String, i32> = serde_json::from_str(r#"{"Error":"bad"}"#).unwrap();
        assert_eq!(back, Outcome::error("bad".to_string()));
    }
}
