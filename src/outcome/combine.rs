//! Two-outcome combinators.
//!
//! Each combinator takes a second, lazily evaluated outcome and a function
//! that combines both sides. The second outcome is only produced when the
//! first one allows it.

use super::Outcome;

impl<E, T> Outcome<E, T> {
    /// Sequence two fallible computations and combine their values.
    ///
    /// Equivalent to `self.and_then(|x| other().and_then(|y| f(x, y)))`:
    /// `other` is never evaluated when `self` failed, and `other`'s failure
    /// wins when `self` succeeded.
    ///
    /// ```rust
    /// use waypoint::Outcome;
    ///
    /// let total: Outcome<&str, i32> =
    ///     Outcome::ok(2).and_then_with(|| Outcome::ok(3), |a, b| Outcome::ok(a * b));
    /// assert_eq!(total, Outcome::ok(6));
    /// ```
    pub fn and_then_with<U, R, G, F>(self, other: G, f: F) -> Outcome<E, R>
    where
        G: FnOnce() -> Outcome<E, U>,
        F: FnOnce(T, U) -> Outcome<E, R>,
    {
        self.and_then(|left| other().and_then(|right| f(left, right)))
    }

    /// Like [`and_then_with`](Self::and_then_with), but `f` returns a plain
    /// value that is wrapped in `Ok`.
    pub fn map_with<U, R, G, F>(self, other: G, f: F) -> Outcome<E, R>
    where
        G: FnOnce() -> Outcome<E, U>,
        F: FnOnce(T, U) -> R,
    {
        self.and_then(|left| other().map(|right| f(left, right)))
    }

    /// Try a second alternative when `self` failed.
    ///
    /// - `self` succeeded: returned as is, `other` is never evaluated.
    /// - `self` failed, `other` succeeded: `other`'s success is returned.
    /// - both failed: `combine` receives both reasons (first, second) and its
    ///   outcome is returned.
    pub fn or_else_with<E2, E3, G, F>(self, other: G, combine: F) -> Outcome<E3, T>
    where
        G: FnOnce() -> Outcome<E2, T>,
        F: FnOnce(E, E2) -> Outcome<E3, T>,
    {
        self.or_else(|first| other().or_else(|second| combine(first, second)))
    }
}
