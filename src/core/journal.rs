//! Dispatch journal tracking.
//!
//! Provides immutable tracking of every action a store has processed,
//! with the state before and after each reduction, following functional
//! programming principles.

use super::action::StoreAction;
use super::state::StoreState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched action and its reduction.
///
/// Entries are immutable values capturing one step of a store's life:
/// the action, the state it found, and the state it left behind.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct JournalEntry<S: StoreState, A: StoreAction> {
    /// The action that was dispatched
    pub action: A,
    /// The state before the reduction
    pub before: S,
    /// The state after the reduction
    pub after: S,
    /// When the dispatch occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: StoreState, A: StoreAction> JournalEntry<S, A> {
    /// Check whether this dispatch changed the state.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Ordered journal of dispatched actions.
///
/// The journal is immutable - the `record` method returns a new journal
/// with the entry added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use tallyset::core::{Journal, JournalEntry, StoreAction, StoreState};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
/// struct Count {
///     n: i64,
/// }
///
/// impl StoreState for Count {}
///
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// enum Nudge {
///     Up,
/// }
///
/// impl StoreAction for Nudge {
///     type Key = u8;
///
///     fn key(&self) -> u8 {
///         0
///     }
///
///     fn name(&self) -> &'static str {
///         "nudge/up"
///     }
/// }
///
/// let journal = Journal::new();
///
/// let journal = journal.record(JournalEntry {
///     action: Nudge::Up,
///     before: Count { n: 0 },
///     after: Count { n: 1 },
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(journal.entries().len(), 1);
/// assert!(journal.entries()[0].changed());
///
/// let states = journal.states();
/// assert_eq!(states, vec![&Count { n: 0 }, &Count { n: 1 }]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Journal<S: StoreState, A: StoreAction> {
    entries: Vec<JournalEntry<S, A>>,
}

impl<S: StoreState, A: StoreAction> Default for Journal<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StoreState, A: StoreAction> Journal<S, A> {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new journal.
    ///
    /// This is a pure function - it does not mutate the existing journal
    /// but returns a new one with the entry added.
    pub fn record(&self, entry: JournalEntry<S, A>) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries in dispatch order.
    pub fn entries(&self) -> &[JournalEntry<S, A>] {
        &self.entries
    }

    /// Get the trajectory of states traversed.
    ///
    /// Returns references to states in order: the state before the
    /// first dispatch, then the state after each entry.
    pub fn states(&self) -> Vec<&S> {
        let mut states = Vec::new();
        if let Some(first) = self.entries.first() {
            states.push(&first.before);
        }
        for entry in &self.entries {
            states.push(&entry.after);
        }
        states
    }

    /// Calculate total duration from first to last entry.
    ///
    /// Returns `None` if the journal is empty. Otherwise returns the
    /// duration between the first and last entry timestamps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
