//! Diagnostic side channel for suppressed agreement checks
//!
//! Every time a battery settles on [`Outcome::Exception`] the classifier
//! reports which rule matched and where. The channel is an injected
//! observer: with none installed the cost is a single branch, and nothing
//! an observer does can change the classification result. Observers must
//! be thread-safe; the bundled counter serializes writes behind a mutex
//! and drops them on a poisoned lock rather than ever failing the call.
//!
//! [`Outcome::Exception`]: crate::classifier::Outcome::Exception

use std::collections::HashMap;
use std::sync::Mutex;

/// One suppressed-check report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExceptionEvent<'a> {
    /// Stable identifier of the rule that matched
    pub rule: &'static str,
    /// Candidate token position within the sequence
    pub index: usize,
    /// Clean form of the candidate token
    pub token: &'a str,
}

/// Sink for suppressed-check reports
pub trait ExceptionObserver: Send + Sync {
    /// Record one event; must not block and cannot fail
    fn record(&self, event: &ExceptionEvent<'_>);
}

/// Observer that forwards events to the `tracing` subscriber at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExceptionObserver for TracingObserver {
    fn record(&self, event: &ExceptionEvent<'_>) {
        tracing::debug!(
            rule = event.rule,
            index = event.index,
            token = event.token,
            "agreement check suppressed"
        );
    }
}

/// Best-effort per-rule occurrence counter
#[derive(Debug, Default)]
pub struct ExceptionCounter {
    counts: Mutex<HashMap<&'static str, u64>>,
}

impl ExceptionCounter {
    /// Create a counter with no recorded events
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the counts accumulated so far
    pub fn snapshot(&self) -> HashMap<&'static str, u64> {
        self.counts
            .lock()
            .map(|counts| counts.clone())
            .unwrap_or_default()
    }
}

impl ExceptionObserver for ExceptionCounter {
    fn record(&self, event: &ExceptionEvent<'_>) {
        // a poisoned lock loses the event, never the classification
        if let Ok(mut counts) = self.counts.lock() {
            *counts.entry(event.rule).or_insert(0) += 1;
        }
    }
}
