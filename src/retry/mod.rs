//! Bounded retries with exponential backoff and jitter.
//!
//! [`RetryExecutor`] wraps any fallible async operation. Each failed attempt
//! is reported to the configured [`RetryObserver`](crate::observability::RetryObserver)s,
//! then the caller is suspended for `base_delay * 2^retry_index + jitter`
//! before trying again, up to [`RetryPolicy::max_attempts`] attempts in total.

mod executor;
mod jitter;
mod policy;

pub use executor::{CallOutcome, RetryError, RetryExecutor};
pub use jitter::{FixedJitter, JitterSource, NoJitter, SeededJitter, ThreadRngJitter};
pub use policy::RetryPolicy;
