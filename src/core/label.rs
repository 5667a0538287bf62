//! Step labels.
//!
//! A label names a step and is used both as the key of a machine's vertex
//! map and as the target of a `Continue` transition.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for anything usable as a step label.
///
/// Blanket-implemented: enums, `&'static str`, `String` and integers all
/// qualify. Closed label sets are usually declared with
/// [`step_labels!`](crate::step_labels), which also provides `ALL` for
/// exhaustiveness checks.
///
/// # Required Traits
///
/// - `Clone`: labels are copied into errors and traces
/// - `Eq` + `Hash`: labels key the vertex map
/// - `Debug`: labels appear in log fields and error messages
/// - `Send` + `Sync`: machines are shareable across threads
pub trait Label: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
