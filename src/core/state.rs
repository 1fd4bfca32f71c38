//! Core StoreState trait for store-managed state values.
//!
//! All state handled by a rule set or store must implement this trait.
//! It carries no methods of its own; it bundles the bounds the engine
//! needs to snapshot, compare, and journal state values.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Marker trait for state values managed by a store.
///
/// State is an immutable value. Reducers never mutate it in place;
/// they consume the current value and return the next one.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for journaling
/// - `PartialEq`: states must be comparable to detect no-op reductions
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for journal export
///
/// # Example
///
/// ```rust
/// use tallyset::core::StoreState;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
/// struct Gauge {
///     level: u32,
/// }
///
/// impl StoreState for Gauge {}
/// ```
pub trait StoreState:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}
