//! Core store types and logic.
//!
//! This module contains the pure functional core of the store:
//! - State and action contracts via the `StoreState` and `StoreAction` traits
//! - Lifecycle phases for asynchronous operations
//! - Matchers and the ordered rule engine
//! - Diagnostic entries from observational rules
//! - Immutable dispatch journaling
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod diagnostics;
mod journal;
mod lifecycle;
mod matcher;
mod rules;
mod state;

pub use action::StoreAction;
pub use diagnostics::DiagnosticEntry;
pub use journal::{Journal, JournalEntry};
pub use lifecycle::{Lifecycle, Phase, RequestId};
pub use matcher::Matcher;
pub use rules::{BuildError, Reduction, RuleSet, RuleSetBuilder};
pub use state::StoreState;
