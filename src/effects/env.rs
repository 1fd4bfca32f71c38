//! Environment capabilities for effectful operations.
//!
//! The store never reaches for global randomness, clocks, or logging
//! directly. Everything nondeterministic comes in through these traits,
//! so tests can substitute scripted implementations and production code
//! uses [`SystemEnv`].

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use rand::Rng;

use crate::core::DiagnosticEntry;

/// Source of uniform random draws on `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Draw the next value.
    fn next_unit(&self) -> f64;
}

/// Source of delays.
pub trait Timer: Send + Sync {
    /// A future that completes after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
}

/// Destination for diagnostic entries emitted by observational rules.
pub trait DiagnosticsSink: Send + Sync {
    /// Record one entry.
    fn record(&self, entry: &DiagnosticEntry);
}

/// Production environment: thread-local randomness, the tokio timer,
/// and structured log output for diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create the production environment.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for SystemEnv {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

impl Timer for SystemEnv {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

impl DiagnosticsSink for SystemEnv {
    fn record(&self, entry: &DiagnosticEntry) {
        tracing::info!(
            target: "tallyset::diagnostics",
            rule = entry.rule,
            action = entry.action_type,
            payload = %entry.payload,
            "{}",
            entry.message
        );
    }
}
