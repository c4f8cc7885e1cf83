//! Injectable random sources for retry jitter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

/// Source of the random component added to each backoff delay.
pub trait JitterSource: Send + Sync + fmt::Debug {
    /// Draw a duration uniformly from `[0, ceiling]`.
    fn sample(&self, ceiling: Duration) -> Duration;
}

fn ceiling_nanos(ceiling: Duration) -> u64 {
    u64::try_from(ceiling.as_nanos()).unwrap_or(u64::MAX)
}

/// Thread-local RNG; the default for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn sample(&self, ceiling: Duration) -> Duration {
        if ceiling.is_zero() {
            return Duration::ZERO;
        }
        Duration::from_nanos(rand::thread_rng().gen_range(0..=ceiling_nanos(ceiling)))
    }
}

/// Reproducible jitter from a fixed seed.
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn sample(&self, ceiling: Duration) -> Duration {
        if ceiling.is_zero() {
            return Duration::ZERO;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Duration::from_nanos(rng.gen_range(0..=ceiling_nanos(ceiling)))
    }
}

/// No jitter at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&self, _ceiling: Duration) -> Duration {
        Duration::ZERO
    }
}

/// Always the same amount, capped by the ceiling.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub Duration);

impl JitterSource for FixedJitter {
    fn sample(&self, ceiling: Duration) -> Duration {
        self.0.min(ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_within_ceiling() {
        let ceiling = Duration::from_millis(999);
        for _ in 0..1000 {
            assert!(ThreadRngJitter.sample(ceiling) <= ceiling);
        }
        assert_eq!(ThreadRngJitter.sample(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let ceiling = Duration::from_millis(999);
        let a = SeededJitter::new(42);
        let b = SeededJitter::new(42);
        for _ in 0..20 {
            assert_eq!(a.sample(ceiling), b.sample(ceiling));
        }
    }

    #[test]
    fn test_fixed_and_none() {
        let ceiling = Duration::from_millis(100);
        assert_eq!(NoJitter.sample(ceiling), Duration::ZERO);
        assert_eq!(FixedJitter(Duration::from_millis(30)).sample(ceiling), Duration::from_millis(30));
        assert_eq!(FixedJitter(Duration::from_secs(1)).sample(ceiling), ceiling);
    }
}
