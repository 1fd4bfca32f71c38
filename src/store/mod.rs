//! The counter store: synchronous dispatch plus the drivers for
//! asynchronous operations.
//!
//! The store owns the current state and the journal behind one mutex,
//! held only while a reduction commits. Asynchronous operations are
//! driven by a settlement loop: dispatch the pending event, run the
//! decision effect against the environment, then dispatch exactly one
//! settled event mirroring the returned result.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

use crate::core::{Journal, JournalEntry, Lifecycle, RequestId, RuleSet, StoreAction};
use crate::counter::{counter_rules, select_count, Action, CounterState, OpFailure};
use crate::effects::{
    another_async_decision, increment_async_decision, DiagnosticsSink, RandomSource, SystemEnv,
    Timer, FULFILL_LATENCY,
};

struct StoreCell {
    state: CounterState,
    journal: Journal<CounterState, Action>,
}

/// A counter store bound to an environment.
///
/// Clones share the same state and journal; the environment is cloned
/// along, so handles can be moved into spawned tasks.
///
/// # Example
///
/// ```rust
/// use tallyset::counter::Action;
/// use tallyset::store::CounterStore;
///
/// let store = CounterStore::system();
/// store.dispatch(Action::Decrement);
/// store.dispatch(Action::IncrementByAmount { amount: 6 });
/// assert_eq!(store.count(), 5);
/// ```
#[derive(Clone)]
pub struct CounterStore<Env> {
    cell: Arc<Mutex<StoreCell>>,
    rules: Arc<RuleSet<CounterState, Action>>,
    env: Env,
}

impl CounterStore<SystemEnv> {
    /// Create a store on the production environment.
    pub fn system() -> Self {
        Self::new(SystemEnv::new())
    }
}

impl<Env> CounterStore<Env>
where
    Env: RandomSource + Timer + DiagnosticsSink + Clone + Send + Sync + 'static,
{
    /// Create a store starting at zero.
    pub fn new(env: Env) -> Self {
        Self::with_initial(CounterState::default(), env)
    }

    /// Create a store starting from the given state.
    pub fn with_initial(initial: CounterState, env: Env) -> Self {
        Self {
            cell: Arc::new(Mutex::new(StoreCell {
                state: initial,
                journal: Journal::new(),
            })),
            rules: Arc::new(counter_rules()),
            env,
        }
    }

    /// Dispatch one action through the rule set.
    ///
    /// The reduction and journal update commit atomically under the
    /// store lock. Diagnostics from observational rules are forwarded
    /// to the environment's sink after the lock is released.
    pub fn dispatch(&self, action: Action) {
        let diagnostics = {
            let mut cell = self.cell.lock();
            let before = cell.state;
            let reduction = self.rules.apply(before, &action);
            tracing::debug!(
                target: "tallyset::store",
                action = action.name(),
                before = before.value,
                after = reduction.next.value,
                "Dispatched action"
            );
            cell.state = reduction.next;
            cell.journal = cell.journal.record(JournalEntry {
                action,
                before,
                after: reduction.next,
                timestamp: Utc::now(),
            });
            reduction.diagnostics
        };

        for entry in &diagnostics {
            self.env.record(entry);
        }
    }

    /// Subtract one from the count.
    pub fn decrement(&self) {
        self.dispatch(Action::Decrement);
    }

    /// Add `amount` to the count.
    pub fn increment_by_amount(&self, amount: i64) {
        self.dispatch(Action::IncrementByAmount { amount });
    }

    /// Add `amount` to the count via the standalone manual event.
    pub fn manual_increment(&self, amount: i64) {
        self.dispatch(Action::ManualIncrement { amount });
    }

    /// Run the simulated asynchronous increment.
    ///
    /// Dispatches a pending event immediately. A quarter of invocations
    /// reject at once with the canonical failure; the rest fulfill with
    /// `amount` after the fixed latency, at which point the count
    /// changes. Dropping the returned future before it completes
    /// abandons the invocation: its settled event is never dispatched.
    pub async fn increment_async(&self, amount: i64) -> Result<i64, OpFailure> {
        self.settle(
            increment_async_decision(amount),
            Some(FULFILL_LATENCY),
            |request_id, event| Action::IncrementAsync { request_id, event },
        )
        .await
    }

    /// Run the greeting operation.
    ///
    /// Fulfills immediately with `"Hi!"`. The count never changes; the
    /// lifecycle events only feed the observational rules.
    pub async fn another_async_operation(&self) -> Result<String, OpFailure> {
        self.settle(another_async_decision(), None, |request_id, event| {
            Action::AnotherAsyncOperation { request_id, event }
        })
        .await
    }

    /// Drive one asynchronous operation through its lifecycle.
    async fn settle<T>(
        &self,
        decision: BoxedEffect<T, OpFailure, Env>,
        latency: Option<Duration>,
        lift: fn(RequestId, Lifecycle<T, OpFailure>) -> Action,
    ) -> Result<T, OpFailure>
    where
        T: Clone + Send + 'static,
    {
        let request_id = RequestId::new();
        tracing::debug!(
            target: "tallyset::store",
            request_id = %request_id,
            "Accepted async operation"
        );
        self.dispatch(lift(request_id, Lifecycle::Pending));

        match decision.run(&self.env).await {
            Ok(payload) => {
                if let Some(wait) = latency {
                    self.env.sleep(wait).await;
                }
                tracing::debug!(
                    target: "tallyset::store",
                    request_id = %request_id,
                    "Async operation fulfilled"
                );
                self.dispatch(lift(request_id, Lifecycle::Fulfilled(payload.clone())));
                Ok(payload)
            }
            Err(error) => {
                tracing::debug!(
                    target: "tallyset::store",
                    request_id = %request_id,
                    error = %error,
                    "Async operation rejected"
                );
                self.dispatch(lift(request_id, Lifecycle::Rejected(error.clone())));
                Err(error)
            }
        }
    }

    /// The current state.
    pub fn state(&self) -> CounterState {
        self.cell.lock().state
    }

    /// The current count.
    pub fn count(&self) -> i64 {
        select_count(&self.state())
    }

    /// A snapshot of the journal.
    pub fn journal(&self) -> Journal<CounterState, Action> {
        self.cell.lock().journal.clone()
    }
}
