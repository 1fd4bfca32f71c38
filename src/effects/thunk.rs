//! Decision effects for the counter's asynchronous operations.
//!
//! Each asynchronous operation is split into a pure-ish decision effect
//! (what outcome this invocation has, drawn from the environment) and
//! the store's settlement driver that surrounds it with lifecycle
//! dispatches. The constants here fix the simulated behavior: a quarter
//! of increment invocations reject up front, the rest fulfill after a
//! fixed latency.

use std::time::Duration;

use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

use super::env::RandomSource;
use crate::counter::OpFailure;

/// Probability that one `IncrementAsync` invocation rejects.
pub const FAILURE_PROBABILITY: f64 = 0.25;

/// Latency between a successful decision and its fulfilled event.
pub const FULFILL_LATENCY: Duration = Duration::from_millis(1000);

/// Payload of every fulfilled `AnotherAsyncOperation` invocation.
pub const GREETING: &str = "Hi!";

/// Decide the outcome of one `IncrementAsync` invocation.
///
/// Draws once from the environment's random source. Draws below
/// [`FAILURE_PROBABILITY`] reject with the canonical failure; the rest
/// fulfill with `amount`. The latency on success is applied by the
/// caller, not here.
pub fn increment_async_decision<Env>(amount: i64) -> BoxedEffect<i64, OpFailure, Env>
where
    Env: RandomSource + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        if env.next_unit() < FAILURE_PROBABILITY {
            Err(OpFailure::random_math())
        } else {
            Ok(amount)
        }
    })
    .boxed()
}

/// Decide the outcome of one `AnotherAsyncOperation` invocation.
///
/// Always fulfills immediately with [`GREETING`].
pub fn another_async_decision<Env>() -> BoxedEffect<String, OpFailure, Env>
where
    Env: Clone + Send + Sync + 'static,
{
    pure(GREETING.to_string()).boxed()
}
