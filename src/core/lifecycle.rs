//! Lifecycle phases for asynchronous operations.
//!
//! Every asynchronous operation run through a store announces itself
//! three ways at most: once when accepted (`Pending`), then exactly once
//! more when it settles (`Fulfilled` or `Rejected`). The settled
//! variants carry the operation's payload or error so reducers can fold
//! them into state.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The phase of an asynchronous operation, without its payload.
///
/// Used as the lifecycle half of a routing key, so case handlers and
/// matchers can select on phase alone.
///
/// # Example
///
/// ```rust
/// use tallyset::core::Phase;
///
/// assert_eq!(Phase::Pending.name(), "pending");
/// assert!(!Phase::Pending.is_settled());
/// assert!(Phase::Rejected.is_settled());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// The operation has been accepted and is in flight.
    Pending,
    /// The operation settled successfully.
    Fulfilled,
    /// The operation settled with an error.
    Rejected,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }

    /// Check whether this phase terminates the operation.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Fulfilled | Self::Rejected)
    }
}

/// A lifecycle event of an asynchronous operation, with its payload.
///
/// `Lifecycle<T, E>` is the data carried inside an action: `T` is the
/// fulfillment payload, `E` the rejection value. An operation emits
/// `Pending` first and exactly one settled variant afterwards.
///
/// # Example
///
/// ```rust
/// use tallyset::core::{Lifecycle, Phase};
///
/// let event: Lifecycle<i64, String> = Lifecycle::Fulfilled(5);
/// assert_eq!(event.phase(), Phase::Fulfilled);
/// assert_eq!(event.payload(), Some(&5));
/// assert_eq!(event.error(), None);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Lifecycle<T, E> {
    /// The operation has been accepted and is in flight.
    Pending,
    /// The operation settled successfully with a payload.
    Fulfilled(T),
    /// The operation settled with a rejection value.
    Rejected(E),
}

impl<T, E> Lifecycle<T, E> {
    /// The payload-free phase of this event.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Pending => Phase::Pending,
            Self::Fulfilled(_) => Phase::Fulfilled,
            Self::Rejected(_) => Phase::Rejected,
        }
    }

    /// The fulfillment payload, if this event is `Fulfilled`.
    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(payload) => Some(payload),
            _ => None,
        }
    }

    /// The rejection value, if this event is `Rejected`.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

/// Unique identifier correlating the lifecycle events of one invocation.
///
/// Each invocation of an asynchronous operation is assigned a fresh id,
/// and its `Pending` and settled events carry the same one. Concurrent
/// invocations of the same operation stay distinguishable in the
/// journal.
///
/// # Example
///
/// ```rust
/// use tallyset::core::RequestId;
///
/// let a = RequestId::new();
/// let b = RequestId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
