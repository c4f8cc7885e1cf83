//! HTTP client for the Resend email and audience API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and error
//! mapping; retrying is left to the caller.

mod async_wrapper;
pub use async_wrapper::{AsyncResendClient, AsyncResendClientImpl};

use crate::config::Config;
use crate::error::{ResendApiError, ResendApiResult};
use crate::metrics::{Endpoint, Metrics};
use crate::models::{CreateContactRequest, CreatedContact, SendEmailRequest, SentEmail};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the Resend API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. The API key is
/// supplied per call, so one pooled agent serves every invocation.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the Resend API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.resend_api_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with bearer authentication and a JSON body,
    /// decoding the JSON response.
    fn post<B, R>(
        &self,
        endpoint: Endpoint,
        path: &str,
        api_key: &str,
        body: &B,
    ) -> ResendApiResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        self.metrics.record_request(endpoint, duration, result.is_ok());

        let response = match result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                response
            }
            Err(e) => {
                tracing::warn!(endpoint = %endpoint, "POST {} - Error: {}", url, e);
                if matches!(e, ResendApiError::RateLimitExceeded) {
                    self.metrics.record_rate_limited();
                }
                return Err(e);
            }
        };

        let response_body = response
            .into_string()
            .map_err(|e| ResendApiError::HttpError(e.to_string()))?;

        serde_json::from_str(&response_body).map_err(ResendApiError::JsonError)
    }

    /// Map a ureq error to a ResendApiError.
    fn map_error(&self, error: ureq::Error) -> ResendApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => ResendApiError::Unauthorized,
                    400 | 422 => ResendApiError::InvalidRequest(message),
                    429 => ResendApiError::RateLimitExceeded,
                    _ => ResendApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ResendApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ResendApiError::Timeout
                } else {
                    ResendApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Add a contact to the audience named in the request.
    pub fn create_contact(
        &self,
        api_key: &str,
        request: &CreateContactRequest,
    ) -> ResendApiResult<CreatedContact> {
        let path = format!(
            "/audiences/{}/contacts",
            urlencoding::encode(&request.audience_id)
        );
        let created: CreatedContact = self.post(Endpoint::Contacts, &path, api_key, request)?;

        tracing::debug!("Contact created with id: {}", created.id);
        Ok(created)
    }

    /// Submit an email for delivery.
    pub fn send_email(
        &self,
        api_key: &str,
        request: &SendEmailRequest,
    ) -> ResendApiResult<SentEmail> {
        let sent: SentEmail = self.post(Endpoint::Emails, "/emails", api_key, request)?;

        tracing::debug!("Email accepted with id: {}", sent.id);
        Ok(sent)
    }
}
