//! Aggregating many outcomes into one.

use super::Outcome;

/// Collect a list of outcomes into an outcome of a list.
///
/// Values keep their original order. The first `Error` (by position) is
/// returned as soon as it is reached; later items are never pulled from the
/// iterator, so lazily computed outcomes past a failure are not evaluated.
///
/// ```rust
/// use waypoint::outcome::sequence;
/// use waypoint::Outcome;
///
/// let all: Outcome<&str, Vec<i32>> = sequence(vec![Outcome::ok(1), Outcome::ok(2)]);
/// assert_eq!(all, Outcome::ok(vec![1, 2]));
///
/// let first_error: Outcome<&str, Vec<i32>> =
///     sequence(vec![Outcome::ok(1), Outcome::error("x"), Outcome::error("y")]);
/// assert_eq!(first_error, Outcome::error("x"));
/// ```
pub fn sequence<E, T, I>(outcomes: I) -> Outcome<E, Vec<T>>
where
    I: IntoIterator<Item = Outcome<E, T>>,
{
    outcomes.into_iter().collect()
}

impl<E, T, V> FromIterator<Outcome<E, T>> for Outcome<E, V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<E, T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<Result<V, E>>()
            .into()
    }
}

impl<E, T> Outcome<E, T> {
    /// Associated form of [`sequence`].
    pub fn sequence<I>(outcomes: I) -> Outcome<E, Vec<T>>
    where
        I: IntoIterator<Item = Outcome<E, T>>,
    {
        sequence(outcomes)
    }
}
