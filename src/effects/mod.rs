//! Effectful counter operations using Stillwater 0.11.0.
//!
//! This module provides the "imperative shell" around the pure core:
//! environment capabilities for randomness, delays, and diagnostics,
//! plus the decision effects behind the counter's asynchronous
//! operations.
//!
//! # Key Concepts
//!
//! - **Environment traits**: Nondeterminism enters only through
//!   [`RandomSource`], [`Timer`], and [`DiagnosticsSink`]
//! - **Decision effects**: Each asynchronous operation's outcome is a
//!   Stillwater effect run against the environment
//!
//! # Zero-Cost Abstractions
//!
//! Following Stillwater 0.11.0 conventions:
//! - Decision constructors return `BoxedEffect` (one allocation per invocation)
//! - Use free-standing constructors: `pure()`, `from_fn()`

mod env;
mod thunk;

pub use env::{DiagnosticsSink, RandomSource, SystemEnv, Timer};
pub use thunk::{
    another_async_decision, increment_async_decision, FAILURE_PROBABILITY, FULFILL_LATENCY,
    GREETING,
};
