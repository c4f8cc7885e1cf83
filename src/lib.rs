//! Contact Relay - retrying dispatch for contact-form submissions.
//!
//! This library forwards two kinds of inbound events to the Resend API:
//! adding a contact to an audience, and emailing a contact-form submission
//! to a fixed inbox. Both provider calls run through one generic retry
//! executor with exponential backoff and jitter.
//!
//! # Architecture
//!
//! - **models**: Inbound events and Resend request/response payloads
//! - **domain**: Value objects and the validation policies
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **retry**: Retry policy, jitter sources and the retry executor
//! - **observability**: Retry observers (tracing, counters)
//! - **client**: HTTP client for the Resend API
//! - **templates**: HTML rendering for outgoing emails
//! - **services**: Contact and email services
//! - **handler**: Event decoding and response mapping for host platforms

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod retry;
pub mod services;
pub mod templates;

// Re-export commonly used types
pub use client::{AsyncResendClient, AsyncResendClientImpl, ResendClient};
pub use config::{Config, ContactConfig, EmailConfig};
pub use domain::{ContactId, EmailAddress, EmailId, ValidationError};
pub use error::{ConfigError, ResendApiError, ServiceError};
pub use handler::Response;
pub use metrics::{Endpoint, EndpointStats, Metrics, MetricsSummary};
pub use models::{ContactRequest, EmailRequest};
pub use observability::{RetryMetrics, RetryObserver, RetryStatus, TracingObserver};
pub use retry::{CallOutcome, RetryError, RetryExecutor, RetryPolicy};
pub use services::{ContactService, ContactServiceImpl, EmailService, EmailServiceImpl};
