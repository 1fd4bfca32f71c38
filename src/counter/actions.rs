//! Counter actions: one tagged union for every dispatchable event.
//!
//! Synchronous operations are plain variants. Asynchronous operations
//! appear as lifecycle events carrying a request id and a
//! [`Lifecycle`] value, so a single dispatch pipeline sees pending,
//! fulfilled, and rejected notifications as ordinary actions. Routing
//! is by [`Discriminant`], the operation kind paired with an optional
//! lifecycle phase.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Lifecycle, Phase, RequestId, StoreAction};

/// The rejection message produced by the simulated failure path.
pub const RANDOM_MATH_ERROR: &str = "Random math error!";

/// The operations the counter understands, without payload or phase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OpKind {
    /// Subtract one from the count.
    Decrement,
    /// Add a given amount to the count.
    IncrementByAmount,
    /// Add a given amount via the standalone manual event.
    ManualIncrement,
    /// Add a given amount after a simulated asynchronous computation.
    IncrementAsync,
    /// Produce a greeting without touching the count.
    AnotherAsyncOperation,
}

impl OpKind {
    /// Get the operation's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decrement => "decrement",
            Self::IncrementByAmount => "incrementByAmount",
            Self::ManualIncrement => "manualIncrement",
            Self::IncrementAsync => "incrementAsync",
            Self::AnotherAsyncOperation => "anotherAsyncOperation",
        }
    }
}

/// Routing key for counter actions: operation kind plus lifecycle phase.
///
/// Synchronous actions have no phase. Lifecycle events of asynchronous
/// operations carry the phase they announce, so `(IncrementAsync,
/// Fulfilled)` and `(IncrementAsync, Rejected)` route independently.
///
/// # Example
///
/// ```rust
/// use tallyset::core::Phase;
/// use tallyset::counter::{Discriminant, OpKind};
///
/// let sync = Discriminant::of(OpKind::Decrement);
/// assert_eq!(sync.phase, None);
///
/// let settled = Discriminant::lifecycle(OpKind::IncrementAsync, Phase::Fulfilled);
/// assert_eq!(settled.phase, Some(Phase::Fulfilled));
/// assert_ne!(sync, settled);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Discriminant {
    /// The operation this action belongs to.
    pub op: OpKind,
    /// The lifecycle phase, for events of asynchronous operations.
    pub phase: Option<Phase>,
}

impl Discriminant {
    /// Key for a synchronous action of the given operation.
    pub fn of(op: OpKind) -> Self {
        Self { op, phase: None }
    }

    /// Key for a lifecycle event of the given asynchronous operation.
    pub fn lifecycle(op: OpKind, phase: Phase) -> Self {
        Self {
            op,
            phase: Some(phase),
        }
    }
}

/// Failure value carried by rejected asynchronous operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpFailure {
    /// The simulated computation rejected.
    #[error("{error}")]
    RandomSimulatedFailure {
        /// Human-readable failure description.
        error: String,
    },
}

impl OpFailure {
    /// The canonical simulated failure.
    pub fn random_math() -> Self {
        Self::RandomSimulatedFailure {
            error: RANDOM_MATH_ERROR.to_string(),
        }
    }

    /// The failure's description.
    pub fn message(&self) -> &str {
        match self {
            Self::RandomSimulatedFailure { error } => error,
        }
    }
}

/// Every event the counter store can process.
///
/// Lifecycle variants are emitted by the store itself as an
/// asynchronous operation progresses; callers dispatch the synchronous
/// variants directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Subtract one from the count.
    Decrement,
    /// Add `amount` to the count.
    IncrementByAmount { amount: i64 },
    /// Add `amount` to the count via the standalone manual event.
    ManualIncrement { amount: i64 },
    /// A lifecycle event of the simulated asynchronous increment.
    IncrementAsync {
        request_id: RequestId,
        event: Lifecycle<i64, OpFailure>,
    },
    /// A lifecycle event of the greeting operation.
    AnotherAsyncOperation {
        request_id: RequestId,
        event: Lifecycle<String, OpFailure>,
    },
}

impl Action {
    /// The operation this action belongs to.
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Decrement => OpKind::Decrement,
            Self::IncrementByAmount { .. } => OpKind::IncrementByAmount,
            Self::ManualIncrement { .. } => OpKind::ManualIncrement,
            Self::IncrementAsync { .. } => OpKind::IncrementAsync,
            Self::AnotherAsyncOperation { .. } => OpKind::AnotherAsyncOperation,
        }
    }

    /// The lifecycle phase, for events of asynchronous operations.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::IncrementAsync { event, .. } => Some(event.phase()),
            Self::AnotherAsyncOperation { event, .. } => Some(event.phase()),
            _ => None,
        }
    }

    /// The request id, for events of asynchronous operations.
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            Self::IncrementAsync { request_id, .. } => Some(*request_id),
            Self::AnotherAsyncOperation { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    /// The numeric payload of actions that merge into the count.
    ///
    /// `ManualIncrement`, `IncrementByAmount`, and fulfilled
    /// `IncrementAsync` events carry one; everything else returns
    /// `None`.
    pub fn amount_payload(&self) -> Option<i64> {
        match self {
            Self::IncrementByAmount { amount } | Self::ManualIncrement { amount } => Some(*amount),
            Self::IncrementAsync {
                event: Lifecycle::Fulfilled(amount),
                ..
            } => Some(*amount),
            _ => None,
        }
    }
}

impl StoreAction for Action {
    type Key = Discriminant;

    fn key(&self) -> Discriminant {
        match self.phase() {
            Some(phase) => Discriminant::lifecycle(self.kind(), phase),
            None => Discriminant::of(self.kind()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Decrement => "counter/decrement",
            Self::IncrementByAmount { .. } => "counter/incrementByAmount",
            Self::ManualIncrement { .. } => "increment/manual",
            Self::IncrementAsync { event, .. } => match event.phase() {
                Phase::Pending => "incrementAsync/pending",
                Phase::Fulfilled => "incrementAsync/fulfilled",
                Phase::Rejected => "incrementAsync/rejected",
            },
            Self::AnotherAsyncOperation { event, .. } => match event.phase() {
                Phase::Pending => "anotherAsyncOperation/pending",
                Phase::Fulfilled => "anotherAsyncOperation/fulfilled",
                Phase::Rejected => "anotherAsyncOperation/rejected",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sync_actions_route_without_phase() {
        assert_eq!(
            Action::Decrement.key(),
            Discriminant::of(OpKind::Decrement)
        );
        assert_eq!(
            Action::ManualIncrement { amount: 2 }.key(),
            Discriminant::of(OpKind::ManualIncrement)
        );
        assert_eq!(Action::Decrement.phase(), None);
        assert_eq!(Action::Decrement.request_id(), None);
    }

    #[test]
    fn lifecycle_actions_route_by_op_and_phase() {
        let id = RequestId::new();
        let action = Action::IncrementAsync {
            request_id: id,
            event: Lifecycle::Fulfilled(4),
        };

        assert_eq!(action.kind(), OpKind::IncrementAsync);
        assert_eq!(action.phase(), Some(Phase::Fulfilled));
        assert_eq!(action.request_id(), Some(id));
        assert_eq!(
            action.key(),
            Discriminant::lifecycle(OpKind::IncrementAsync, Phase::Fulfilled)
        );
    }

    #[test]
    fn action_names_follow_slice_conventions() {
        assert_eq!(Action::Decrement.name(), "counter/decrement");
        assert_eq!(
            Action::IncrementByAmount { amount: 1 }.name(),
            "counter/incrementByAmount"
        );
        assert_eq!(
            Action::ManualIncrement { amount: 1 }.name(),
            "increment/manual"
        );

        let id = RequestId::new();
        assert_eq!(
            Action::IncrementAsync {
                request_id: id,
                event: Lifecycle::Pending,
            }
            .name(),
            "incrementAsync/pending"
        );
        assert_eq!(
            Action::AnotherAsyncOperation {
                request_id: id,
                event: Lifecycle::Rejected(OpFailure::random_math()),
            }
            .name(),
            "anotherAsyncOperation/rejected"
        );
    }

    #[test]
    fn amount_payload_covers_merging_actions_only() {
        assert_eq!(Action::IncrementByAmount { amount: 9 }.amount_payload(), Some(9));
        assert_eq!(Action::ManualIncrement { amount: -2 }.amount_payload(), Some(-2));

        let id = RequestId::new();
        assert_eq!(
            Action::IncrementAsync {
                request_id: id,
                event: Lifecycle::Fulfilled(7),
            }
            .amount_payload(),
            Some(7)
        );
        assert_eq!(
            Action::IncrementAsync {
                request_id: id,
                event: Lifecycle::Pending,
            }
            .amount_payload(),
            None
        );
        assert_eq!(
            Action::IncrementAsync {
                request_id: id,
                event: Lifecycle::Rejected(OpFailure::random_math()),
            }
            .amount_payload(),
            None
        );
        assert_eq!(Action::Decrement.amount_payload(), None);
    }

    #[test]
    fn failure_serializes_as_error_object() {
        let failure = OpFailure::random_math();
        assert_eq!(failure.to_string(), RANDOM_MATH_ERROR);
        assert_eq!(failure.message(), RANDOM_MATH_ERROR);
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({ "error": "Random math error!" })
        );
    }

    #[test]
    fn action_serializes_correctly() {
        let action = Action::IncrementAsync {
            request_id: RequestId::new(),
            event: Lifecycle::Rejected(OpFailure::random_math()),
        };
        let json = serde_json::to_string(&action).unwrap();
        let restored: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, restored);
    }
}
