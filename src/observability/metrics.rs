//! Lock-free counters for retried calls.
//!
//! `RetryMetrics` is a `RetryObserver`; clones share the same counters so one
//! instance can be handed to several executors and read from elsewhere.

use super::{RetryObserver, RetryStatus};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Counters for retried provider calls.
#[derive(Debug, Clone)]
pub struct RetryMetrics {
    attempts_failed_total: Arc<AtomicU64>,
    calls_succeeded_total: Arc<AtomicU64>,
    calls_exhausted_total: Arc<AtomicU64>,
    calls_cancelled_total: Arc<AtomicU64>,
    attempts_total: Arc<AtomicU64>,
    backoff_total_ms: Arc<AtomicU64>,
}

impl RetryMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            attempts_failed_total: Arc::new(AtomicU64::new(0)),
            calls_succeeded_total: Arc::new(AtomicU64::new(0)),
            calls_exhausted_total: Arc::new(AtomicU64::new(0)),
            calls_cancelled_total: Arc::new(AtomicU64::new(0)),
            attempts_total: Arc::new(AtomicU64::new(0)),
            backoff_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the total number of failed attempts.
    pub fn attempts_failed_total(&self) -> u64 {
        self.attempts_failed_total.load(Ordering::Relaxed)
    }

    /// Get the total number of attempts across finished calls.
    pub fn attempts_total(&self) -> u64 {
        self.attempts_total.load(Ordering::Relaxed)
    }

    pub fn calls_succeeded_total(&self) -> u64 {
        self.calls_succeeded_total.load(Ordering::Relaxed)
    }

    pub fn calls_exhausted_total(&self) -> u64 {
        self.calls_exhausted_total.load(Ordering::Relaxed)
    }

    pub fn calls_cancelled_total(&self) -> u64 {
        self.calls_cancelled_total.load(Ordering::Relaxed)
    }

    /// Total backoff scheduled, in milliseconds.
    pub fn backoff_total_ms(&self) -> u64 {
        self.backoff_total_ms.load(Ordering::Relaxed)
    }

    /// Fraction of finished calls that succeeded (0.0 to 1.0).
    pub fn success_rate(&self) -> f64 {
        let succeeded = self.calls_succeeded_total() as f64;
        let total = (self.calls_succeeded_total()
            + self.calls_exhausted_total()
            + self.calls_cancelled_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            succeeded / total
        }
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> RetryMetricsSummary {
        RetryMetricsSummary {
            attempts_total: self.attempts_total(),
            attempts_failed_total: self.attempts_failed_total(),
            calls_succeeded_total: self.calls_succeeded_total(),
            calls_exhausted_total: self.calls_exhausted_total(),
            calls_cancelled_total: self.calls_cancelled_total(),
            backoff_total_ms: self.backoff_total_ms(),
        }
    }
}

impl Default for RetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryObserver for RetryMetrics {
    fn on_attempt_failed(
        &self,
        _operation: &str,
        _attempt: u32,
        _error: &dyn fmt::Display,
        next_delay: Option<Duration>,
    ) {
        self.attempts_failed_total.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = next_delay {
            self.backoff_total_ms
                .fetch_add(delay.as_millis() as u64, Ordering::Relaxed);
        }
    }

    fn on_finished(&self, _operation: &str, attempts: u32, status: RetryStatus) {
        self.attempts_total
            .fetch_add(u64::from(attempts), Ordering::Relaxed);
        let counter = match status {
            RetryStatus::Succeeded => &self.calls_succeeded_total,
            RetryStatus::Exhausted => &self.calls_exhausted_total,
            RetryStatus::Cancelled => &self.calls_cancelled_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// A snapshot of retry counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryMetricsSummary {
    pub attempts_total: u64,
    pub attempts_failed_total: u64,
    pub calls_succeeded_total: u64,
    pub calls_exhausted_total: u64,
    pub calls_cancelled_total: u64,
    pub backoff_total_ms: u64,
}

impl fmt::Display for RetryMetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attempts={} failed={} succeeded={} exhausted={} cancelled={} backoff_ms={}",
            self.attempts_total,
            self.attempts_failed_total,
            self.calls_succeeded_total,
            self.calls_exhausted_total,
            self.calls_cancelled_total,
            self.backoff_total_ms,
        )
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer with a specific status and return the elapsed milliseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::info!(
                operation = %self.operation,
                duration_ms = duration_ms as u64,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms as u64,
                "Operation failed"
            );
        }

        duration_ms
    }
}
