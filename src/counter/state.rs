//! Counter state and selectors.

use serde::{Deserialize, Serialize};

use crate::core::StoreState;

/// The counter's entire state: one signed integer.
///
/// All arithmetic on the counter wraps on overflow.
///
/// # Example
///
/// ```rust
/// use tallyset::counter::{select_count, CounterState};
///
/// let state = CounterState::default();
/// assert_eq!(select_count(&state), 0);
///
/// let state = state.incremented_by(5).decremented();
/// assert_eq!(select_count(&state), 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CounterState {
    /// The current count.
    pub value: i64,
}

impl CounterState {
    /// Create a counter state with the given value.
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    /// The state with `amount` added, wrapping on overflow.
    pub fn incremented_by(self, amount: i64) -> Self {
        Self {
            value: self.value.wrapping_add(amount),
        }
    }

    /// The state with one subtracted, wrapping on overflow.
    pub fn decremented(self) -> Self {
        Self {
            value: self.value.wrapping_sub(1),
        }
    }
}

impl StoreState for CounterState {}

/// Read the current count from a counter state.
pub fn select_count(state: &CounterState) -> i64 {
    state.value
}
