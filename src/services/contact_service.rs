//! Contact service layer.
//!
//! Adds a validated contact to the configured Resend audience.

use crate::client::AsyncResendClient;
use crate::config::ContactConfig;
use crate::domain::{validate_contact, ContactId};
use crate::error::ServiceResult;
use crate::models::{ContactRequest, CreateContactRequest};
use crate::observability::Timer;
use crate::retry::RetryExecutor;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Add a contact to the audience in `config`.
    ///
    /// Configuration and input are checked before any provider call; only
    /// the provider call itself is retried.
    async fn add_contact(
        &self,
        input: ContactRequest,
        config: &ContactConfig,
    ) -> ServiceResult<ContactId>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    client: Arc<dyn AsyncResendClient>,
    executor: RetryExecutor,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(client: Arc<dyn AsyncResendClient>, executor: RetryExecutor) -> Self {
        Self { client, executor }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn add_contact(
        &self,
        input: ContactRequest,
        config: &ContactConfig,
    ) -> ServiceResult<ContactId> {
        config.ensure_complete()?;
        validate_contact(&input)?;

        let request = CreateContactRequest::new(&input, &config.audience_id);
        let client = &self.client;
        let api_key = config.api_key.as_str();
        let request = &request;

        let timer = Timer::new("add_contact");
        let outcome = self
            .executor
            .execute("add_contact", move || client.create_contact(api_key, request))
            .await;
        timer.finish_with_status(outcome.is_ok());

        let created = outcome?;
        tracing::info!(id = %created.id, "Contact added successfully");
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AsyncResendClientImpl, ResendClient};
    use crate::config::Config;
    use crate::error::ServiceError;
    use crate::retry::RetryPolicy;

    fn service() -> ContactServiceImpl {
        let config = Config::default();
        let client = Arc::new(AsyncResendClientImpl::new(ResendClient::new(&config)))
            as Arc<dyn AsyncResendClient>;
        ContactServiceImpl::new(client, RetryExecutor::new(RetryPolicy::default()))
    }

    #[tokio::test]
    async fn test_missing_audience_fails_before_network() {
        let config = ContactConfig {
            api_key: "re_key".to_string(),
            audience_id: String::new(),
        };
        let input = ContactRequest {
            email: "a@b.com".to_string(),
            ..Default::default()
        };

        match service().add_contact(input, &config).await {
            Err(ServiceError::MissingConfig(var)) => assert_eq!(var, "AUDIENCE_ID"),
            other => panic!("Expected MissingConfig, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_email_rejected() {
        let config = ContactConfig {
            api_key: "re_key".to_string(),
            audience_id: "aud".to_string(),
        };
        let result = service().add_contact(ContactRequest::default(), &config).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
