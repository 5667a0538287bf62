//! Idempotent lifting into [`Outcome`].

use super::Outcome;

/// Conversion into an [`Outcome`] that leaves existing outcomes untouched.
pub trait IntoOutcome<E, T> {
    fn into_outcome(self) -> Outcome<E, T>;
}

impl<E, T> IntoOutcome<E, T> for Outcome<E, T> {
    fn into_outcome(self) -> Outcome<E, T> {
        self
    }
}

impl<E, T> IntoOutcome<E, T> for Result<T, E> {
    fn into_outcome(self) -> Outcome<E, T> {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_an_outcome_is_identity() {
        let ok: Outcome<&str, i32> = Outcome::ok(1);
        let err: Outcome<&str, i32> = Outcome::error("e");

        assert_eq!(Outcome::wrap(ok), ok);
        assert_eq!(Outcome::wrap(err), err);
    }

    #[test]
    fn wrapping_a_result_converts_variants() {
        let ok: Outcome<String, u8> = Outcome::wrap("7".parse::<u8>().map_err(|e| e.to_string()));
        assert_eq!(ok, Outcome::ok(7));

        let err: Outcome<&str, u8> = Outcome::wrap(Err::<u8, &str>("bad"));
        assert_eq!(err, Outcome::error("bad"));
    }
}
