//! Per-endpoint request counters for the Resend client.
//!
//! Each [`ResendClient`](crate::client::ResendClient) owns one [`Metrics`];
//! clones share the same counters.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Resend endpoints the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /audiences/{id}/contacts`
    Contacts,
    /// `POST /emails`
    Emails,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Emails => "emails",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct EndpointCounters {
    requests: AtomicU64,
    accepted: AtomicU64,
    failed: AtomicU64,
    duration_ms: AtomicU64,
}

impl EndpointCounters {
    fn stats(&self) -> EndpointStats {
        EndpointStats {
            requests: self.requests.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            duration_ms: self.duration_ms.load(Ordering::Relaxed),
        }
    }
}

/// Request counters, kept separately for each [`Endpoint`].
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    contacts: Arc<EndpointCounters>,
    emails: Arc<EndpointCounters>,
    rate_limited_total: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn counters(&self, endpoint: Endpoint) -> &EndpointCounters {
        match endpoint {
            Endpoint::Contacts => &self.contacts,
            Endpoint::Emails => &self.emails,
        }
    }

    /// Record one completed request and how long it took.
    pub fn record_request(&self, endpoint: Endpoint, duration: Duration, accepted: bool) {
        let counters = self.counters(endpoint);
        counters.requests.fetch_add(1, Ordering::Relaxed);
        counters
            .duration_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
        let outcome = if accepted {
            &counters.accepted
        } else {
            &counters.failed
        };
        outcome.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a 429 from the provider.
    pub fn record_rate_limited(&self) {
        self.rate_limited_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of one endpoint's counters.
    pub fn endpoint(&self, endpoint: Endpoint) -> EndpointStats {
        self.counters(endpoint).stats()
    }

    /// Requests across both endpoints.
    pub fn http_requests_total(&self) -> u64 {
        self.endpoint(Endpoint::Contacts).requests + self.endpoint(Endpoint::Emails).requests
    }

    /// Failed requests across both endpoints.
    pub fn http_errors_total(&self) -> u64 {
        self.endpoint(Endpoint::Contacts).failed + self.endpoint(Endpoint::Emails).failed
    }

    pub fn contacts_created_total(&self) -> u64 {
        self.endpoint(Endpoint::Contacts).accepted
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.endpoint(Endpoint::Emails).accepted
    }

    pub fn rate_limited_total(&self) -> u64 {
        self.rate_limited_total.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contacts: self.endpoint(Endpoint::Contacts),
            emails: self.endpoint(Endpoint::Emails),
            rate_limited_total: self.rate_limited_total(),
        }
    }
}

/// Counter values for one endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndpointStats {
    pub requests: u64,
    pub accepted: u64,
    pub failed: u64,
    pub duration_ms: u64,
}

impl EndpointStats {
    /// Mean request duration in milliseconds, 0.0 before the first request.
    pub fn avg_duration_ms(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.duration_ms as f64 / self.requests as f64
        }
    }
}

/// A snapshot of all client counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub contacts: EndpointStats,
    pub emails: EndpointStats,
    pub rate_limited_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.http_errors_total(), 0);
        assert_eq!(metrics.endpoint(Endpoint::Emails).avg_duration_ms(), 0.0);
    }

    #[test]
    fn test_endpoints_counted_separately() {
        let metrics = Metrics::new();
        metrics.record_request(Endpoint::Contacts, Duration::from_millis(100), true);
        metrics.record_request(Endpoint::Emails, Duration::from_millis(200), false);
        metrics.record_request(Endpoint::Emails, Duration::from_millis(400), true);

        let emails = metrics.endpoint(Endpoint::Emails);
        assert_eq!(emails.requests, 2);
        assert_eq!(emails.failed, 1);
        assert_eq!(emails.avg_duration_ms(), 300.0);

        assert_eq!(metrics.contacts_created_total(), 1);
        assert_eq!(metrics.emails_sent_total(), 1);
        assert_eq!(metrics.http_requests_total(), 3);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_request(Endpoint::Contacts, Duration::from_millis(5), false);
        metrics.record_rate_limited();

        let summary = metrics.summary();
        assert_eq!(summary.contacts.failed, 1);
        assert_eq!(summary.emails, EndpointStats::default());
        assert_eq!(summary.rate_limited_total, 1);
        assert_eq!(Endpoint::Contacts.to_string(), "contacts");
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let metrics = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        metrics.record_request(Endpoint::Emails, Duration::from_millis(1), true);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.emails_sent_total(), 200);
    }
}
