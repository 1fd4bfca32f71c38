//! Core StoreAction trait for dispatchable events.
//!
//! Every event a store can process implements this trait. An action
//! exposes two views of itself: a machine-facing discriminant key used
//! by case handlers and matchers, and a human-facing type name used in
//! journals and diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for events dispatched through a store.
///
/// Actions are plain values. Dispatching one never mutates it; the rule
/// set reads it, derives the next state, and records it in the journal.
///
/// # Required Traits
///
/// - `Clone`: actions must be cloneable for journaling
/// - `Debug`: actions must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: actions must be serializable for
///   journal export and diagnostic payloads
///
/// # Example
///
/// ```rust
/// use tallyset::core::StoreAction;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// enum GaugeAction {
///     Raise(u32),
///     Clear,
/// }
///
/// impl StoreAction for GaugeAction {
///     type Key = u8;
///
///     fn key(&self) -> u8 {
///         match self {
///             Self::Raise(_) => 0,
///             Self::Clear => 1,
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Raise(_) => "gauge/raise",
///             Self::Clear => "gauge/clear",
///         }
///     }
/// }
///
/// assert_eq!(GaugeAction::Raise(3).key(), GaugeAction::Raise(9).key());
/// assert_eq!(GaugeAction::Clear.name(), "gauge/clear");
/// ```
pub trait StoreAction:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Discriminant type identifying the action independent of payload.
    ///
    /// Two actions with equal keys are routed identically by case
    /// handlers and matchers, whatever data they carry.
    type Key: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// The routing key for this action.
    fn key(&self) -> Self::Key;

    /// The action's type name for journals and diagnostics.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &'static str;
}
