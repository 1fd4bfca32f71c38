//! Tallyset: an action-matching counter store
//!
//! Tallyset is built on Stillwater's "pure core, imperative shell" philosophy.
//! Reducing an action into state is a pure function; randomness, delays, and
//! log output are isolated behind environment traits and Effect values.
//!
//! # Core Concepts
//!
//! - **Actions**: One tagged union covering synchronous operations and the
//!   lifecycle events of asynchronous ones
//! - **Rules**: Case handlers plus ordered matchers; every matching rule
//!   fires, updating state or emitting a diagnostic
//! - **Journal**: Immutable tracking of every dispatch over time
//! - **Store**: The imperative shell that commits reductions and drives
//!   asynchronous operations to settlement
//!
//! # Example
//!
//! ```rust
//! use tallyset::counter::{counter_rules, Action, CounterState};
//! use tallyset::core::{Lifecycle, RequestId};
//!
//! let rules = counter_rules();
//!
//! let step = rules.apply(CounterState::default(), &Action::IncrementByAmount { amount: 5 });
//! assert_eq!(step.next.value, 5);
//!
//! let fulfilled = Action::IncrementAsync {
//!     request_id: RequestId::new(),
//!     event: Lifecycle::Fulfilled(3),
//! };
//! let step = rules.apply(step.next, &fulfilled);
//! assert_eq!(step.next.value, 8);
//! assert_eq!(step.diagnostics.len(), 1);
//! ```

pub mod core;
pub mod counter;
pub mod effects;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Lifecycle, Phase, RequestId};
pub use counter::{counter_rules, select_count, Action, CounterState, OpFailure, OpKind};
pub use effects::SystemEnv;
pub use store::CounterStore;
