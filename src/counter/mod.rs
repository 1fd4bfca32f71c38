//! The counter domain: state, actions, and rules.
//!
//! Everything here is pure. The counter's state is a single wrapping
//! integer; its actions form one tagged union covering synchronous
//! operations and the lifecycle events of asynchronous ones; its rule
//! set folds actions into state and emits diagnostics for watched
//! lifecycle activity.

mod actions;
mod matchers;
mod rules;
mod state;

pub use actions::{Action, Discriminant, OpFailure, OpKind, RANDOM_MATH_ERROR};
pub use matchers::{any_lifecycle_of, rejected_with_value};
pub use rules::counter_rules;
pub use state::{select_count, CounterState};
