//! Async wrapper around synchronous ResendClient.
//!
//! This module provides an async interface to the synchronous ResendClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ResendClient;
use crate::error::{ResendApiError, ResendApiResult};
use crate::models::{CreateContactRequest, CreatedContact, SendEmailRequest, SentEmail};
use async_trait::async_trait;
use std::sync::Arc;

/// Async provider operations used by the services.
///
/// Implemented by [`AsyncResendClientImpl`] for real traffic and by test
/// doubles that script failures.
#[async_trait]
pub trait AsyncResendClient: Send + Sync {
    async fn create_contact(
        &self,
        api_key: &str,
        request: &CreateContactRequest,
    ) -> ResendApiResult<CreatedContact>;

    async fn send_email(
        &self,
        api_key: &str,
        request: &SendEmailRequest,
    ) -> ResendApiResult<SentEmail>;
}

/// Async wrapper around synchronous ResendClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncResendClientImpl {
    client: Arc<ResendClient>,
}

impl AsyncResendClientImpl {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &ResendClient {
        &self.client
    }
}

#[async_trait]
impl AsyncResendClient for AsyncResendClientImpl {
    async fn create_contact(
        &self,
        api_key: &str,
        request: &CreateContactRequest,
    ) -> ResendApiResult<CreatedContact> {
        let client = self.client.clone();
        let api_key = api_key.to_string();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&api_key, &request))
            .await
            .map_err(|e| ResendApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn send_email(
        &self,
        api_key: &str,
        request: &SendEmailRequest,
    ) -> ResendApiResult<SentEmail> {
        let client = self.client.clone();
        let api_key = api_key.to_string();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.send_email(&api_key, &request))
            .await
            .map_err(|e| ResendApiError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let client = ResendClient::new(&Config::default());
        let async_client = AsyncResendClientImpl::new(client);

        // Should be able to clone
        let cloned = async_client.clone();
        assert_eq!(cloned.inner().metrics().http_requests_total(), 0);
    }

    #[tokio::test]
    async fn test_connection_failure_is_reported() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = ResendClient::with_base_url("http://127.0.0.1:9".to_string());
        let async_client = AsyncResendClientImpl::new(client);

        let request = SendEmailRequest::contact_form("a@b.com", "c@d.com", String::new());
        let result = async_client.send_email("re_key", &request).await;
        assert!(result.is_err());
        assert_eq!(async_client.inner().metrics().http_errors_total(), 1);
    }
}
