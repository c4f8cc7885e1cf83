//! Retry policy and backoff arithmetic.

use super::jitter::JitterSource;
use std::time::Duration;

/// Immutable retry parameters supplied by the caller of the executor.
///
/// The delay before retry `i` (zero-based) is
/// `base_delay * 2^i + uniform(0, jitter_ceiling)`. The deterministic part
/// saturates at `Duration::MAX` rather than overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    jitter_ceiling: Duration,
}

impl RetryPolicy {
    /// Create a policy. `max_attempts` is clamped to at least 1.
    pub fn new(max_attempts: u32, base_delay: Duration, jitter_ceiling: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            jitter_ceiling,
        }
    }

    /// Millisecond time unit with up to 999 ms of jitter.
    pub fn milliseconds_with_jitter(max_attempts: u32) -> Self {
        Self::new(
            max_attempts,
            Duration::from_millis(1),
            Duration::from_millis(999),
        )
    }

    /// Whole-second time unit without jitter: 1s, 2s, 4s, ...
    pub fn whole_seconds(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::from_secs(1), Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn jitter_ceiling(&self) -> Duration {
        self.jitter_ceiling
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn with_jitter_ceiling(mut self, jitter_ceiling: Duration) -> Self {
        self.jitter_ceiling = jitter_ceiling;
        self
    }

    /// Deterministic component of the delay before retry `retry_index`.
    pub fn backoff(&self, retry_index: u32) -> Duration {
        let factor = 1u32.checked_shl(retry_index).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Full delay before retry `retry_index`, jitter drawn from `jitter`.
    pub fn delay(&self, retry_index: u32, jitter: &dyn JitterSource) -> Duration {
        let extra = jitter.sample(self.jitter_ceiling).min(self.jitter_ceiling);
        self.backoff(retry_index).saturating_add(extra)
    }
}

impl Default for RetryPolicy {
    /// Five attempts, millisecond unit, up to 999 ms of jitter.
    fn default() -> Self {
        Self::milliseconds_with_jitter(5)
    }
}
