//! Observability for retried provider calls.
//!
//! Observers receive one event per failed attempt and one when the call
//! finishes. They are advisory only: nothing they do is fed back into the
//! retry loop, and they must not block.

pub mod metrics;

pub use metrics::{RetryMetrics, RetryMetricsSummary, Timer};

use std::fmt;
use std::time::Duration;

/// Terminal state of a retried call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStatus {
    Succeeded,
    Exhausted,
    Cancelled,
}

impl fmt::Display for RetryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Succeeded => "succeeded",
            Self::Exhausted => "exhausted",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Sink for retry events.
pub trait RetryObserver: Send + Sync {
    /// Called after attempt number `attempt` (1-based) fails.
    ///
    /// `next_delay` is the backoff about to be slept, or `None` when no
    /// further attempt will be made.
    fn on_attempt_failed(
        &self,
        operation: &str,
        attempt: u32,
        error: &dyn fmt::Display,
        next_delay: Option<Duration>,
    ) {
        let _ = (operation, attempt, error, next_delay);
    }

    /// Called once with the final outcome.
    fn on_finished(&self, operation: &str, attempts: u32, status: RetryStatus) {
        let _ = (operation, attempts, status);
    }
}

/// Logs retry events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RetryObserver for TracingObserver {
    fn on_attempt_failed(
        &self,
        operation: &str,
        attempt: u32,
        error: &dyn fmt::Display,
        next_delay: Option<Duration>,
    ) {
        tracing::error!(operation = %operation, attempt, error = %error, "Attempt failed");
        if let Some(delay) = next_delay {
            tracing::info!(
                operation = %operation,
                delay_ms = delay.as_millis() as u64,
                "Retrying {}",
                operation
            );
        }
    }

    fn on_finished(&self, operation: &str, attempts: u32, status: RetryStatus) {
        match status {
            RetryStatus::Succeeded => {
                tracing::debug!(operation = %operation, attempts, "Call succeeded")
            }
            RetryStatus::Exhausted => {
                tracing::error!(operation = %operation, attempts, "Retries exhausted")
            }
            RetryStatus::Cancelled => {
                tracing::warn!(operation = %operation, attempts, "Retry cancelled")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl RetryObserver for Silent {}

    #[test]
    fn test_default_methods_are_noops() {
        let observer = Silent;
        observer.on_attempt_failed("op", 1, &"boom", Some(Duration::from_millis(5)));
        observer.on_finished("op", 1, RetryStatus::Exhausted);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RetryStatus::Succeeded.to_string(), "succeeded");
        assert_eq!(RetryStatus::Exhausted.to_string(), "exhausted");
        assert_eq!(RetryStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_tracing_observer_does_not_panic_without_subscriber() {
        let observer = TracingObserver;
        observer.on_attempt_failed("send_email", 2, &"timeout", None);
        observer.on_finished("send_email", 2, RetryStatus::Succeeded);
    }
}
