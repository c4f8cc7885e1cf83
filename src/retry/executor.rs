//! The generic retry loop.

use super::jitter::{JitterSource, ThreadRngJitter};
use super::policy::RetryPolicy;
use crate::observability::{RetryObserver, RetryStatus, TracingObserver};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Terminal failure of a retried call.
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// Every attempt failed; carries the error from the final attempt.
    #[error("failed after {attempts} attempts: {last_error}")]
    Exhausted {
        #[source]
        last_error: E,
        attempts: u32,
    },

    /// The cancellation signal fired before the next attempt.
    #[error("cancelled after {attempts} attempts")]
    Cancelled {
        attempts: u32,
        last_error: Option<E>,
    },
}

impl<E> RetryError<E> {
    /// Number of attempts made before giving up.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Exhausted { attempts, .. } | Self::Cancelled { attempts, .. } => *attempts,
        }
    }

    /// The most recent underlying error, if any attempt was made.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            Self::Exhausted { last_error, .. } => Some(last_error),
            Self::Cancelled { last_error, .. } => last_error.as_ref(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Either the operation's value or the reason retrying stopped.
pub type CallOutcome<T, E> = Result<T, RetryError<E>>;

/// Runs a fallible async operation under a [`RetryPolicy`].
///
/// The executor holds no per-call state, so one instance can be shared by
/// any number of concurrent calls.
#[derive(Clone)]
pub struct RetryExecutor {
    policy: RetryPolicy,
    jitter: Arc<dyn JitterSource>,
    observers: Vec<Arc<dyn RetryObserver>>,
    cancel: Option<CancellationToken>,
}

impl fmt::Debug for RetryExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryExecutor")
            .field("policy", &self.policy)
            .field("jitter", &self.jitter)
            .field("observers", &self.observers.len())
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl RetryExecutor {
    /// Create an executor with thread-local jitter and `tracing` logging.
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            jitter: Arc::new(ThreadRngJitter),
            observers: vec![Arc::new(TracingObserver)],
            cancel: None,
        }
    }

    /// Replace the jitter source.
    pub fn with_jitter(mut self, jitter: Arc<dyn JitterSource>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Add an observer alongside the existing ones.
    pub fn with_observer(mut self, observer: Arc<dyn RetryObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Abort retrying as soon as `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Delay to sleep before retry `retry_index` (zero-based).
    pub fn delay_for(&self, retry_index: u32) -> Duration {
        self.policy.delay(retry_index, self.jitter.as_ref())
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|token| token.is_cancelled())
    }

    fn finish(&self, operation: &str, attempts: u32, status: RetryStatus) {
        for observer in &self.observers {
            observer.on_finished(operation, attempts, status);
        }
    }

    /// Run `attempt` until it succeeds, the policy's attempts are used up,
    /// or the cancellation signal fires.
    ///
    /// No delay follows the final attempt.
    pub async fn execute<T, E, F, Fut>(&self, operation: &str, mut attempt: F) -> CallOutcome<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        let max_attempts = self.policy.max_attempts();
        let mut attempts = 0u32;
        let mut last_error: Option<E> = None;

        loop {
            if self.is_cancelled() {
                self.finish(operation, attempts, RetryStatus::Cancelled);
                return Err(RetryError::Cancelled {
                    attempts,
                    last_error,
                });
            }

            attempts += 1;
            let error = match attempt().await {
                Ok(value) => {
                    self.finish(operation, attempts, RetryStatus::Succeeded);
                    return Ok(value);
                }
                Err(error) => error,
            };

            if attempts >= max_attempts {
                for observer in &self.observers {
                    observer.on_attempt_failed(operation, attempts, &error, None);
                }
                self.finish(operation, attempts, RetryStatus::Exhausted);
                return Err(RetryError::Exhausted {
                    last_error: error,
                    attempts,
                });
            }

            let delay = self.delay_for(attempts - 1);
            for observer in &self.observers {
                observer.on_attempt_failed(operation, attempts, &error, Some(delay));
            }
            last_error = Some(error);

            match &self.cancel {
                Some(token) => {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            self.finish(operation, attempts, RetryStatus::Cancelled);
                            return Err(RetryError::Cancelled {
                                attempts,
                                last_error,
                            });
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
                None => tokio::time::sleep(delay).await,
            }
        }
    }
}
