//! Email service layer.
//!
//! Renders a contact-form submission to HTML and sends it to the configured
//! destination address.

use crate::client::AsyncResendClient;
use crate::config::EmailConfig;
use crate::domain::{validate_email, EmailId};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{EmailRequest, SendEmailRequest};
use crate::observability::Timer;
use crate::retry::RetryExecutor;
use crate::templates::EmailTemplates;
use async_trait::async_trait;
use std::sync::Arc;

/// Email service trait for business operations.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Forward a contact-form submission as an email.
    async fn send_email(&self, input: EmailRequest, config: &EmailConfig)
        -> ServiceResult<EmailId>;
}

/// Default implementation of EmailService.
pub struct EmailServiceImpl {
    client: Arc<dyn AsyncResendClient>,
    executor: RetryExecutor,
    templates: EmailTemplates,
}

impl EmailServiceImpl {
    /// Create a new email service.
    ///
    /// Fails with `ServiceError::Template` if the embedded template does not parse.
    pub fn new(client: Arc<dyn AsyncResendClient>, executor: RetryExecutor) -> ServiceResult<Self> {
        let templates = EmailTemplates::new().map_err(|e| ServiceError::Template(e.to_string()))?;
        Ok(Self {
            client,
            executor,
            templates,
        })
    }
}

#[async_trait]
impl EmailService for EmailServiceImpl {
    async fn send_email(
        &self,
        input: EmailRequest,
        config: &EmailConfig,
    ) -> ServiceResult<EmailId> {
        config.ensure_complete()?;
        validate_email(&input)?;

        let html = self.templates.render_contact_form(&input).map_err(|e| {
            tracing::error!(error = %e, "Failed to construct HTML content");
            ServiceError::Template(e.to_string())
        })?;

        let request =
            SendEmailRequest::contact_form(&config.from_address, &config.to_address, html);
        let client = &self.client;
        let api_key = config.api_key.as_str();
        let request = &request;

        let timer = Timer::new("send_email");
        let outcome = self
            .executor
            .execute("send_email", move || client.send_email(api_key, request))
            .await;
        timer.finish_with_status(outcome.is_ok());

        let sent = outcome?;
        tracing::info!(id = %sent.id, "Email sent successfully");
        Ok(sent.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{AsyncResendClientImpl, ResendClient};
    use crate::config::Config;
    use crate::domain::ValidationError;
    use crate::retry::RetryPolicy;

    fn service() -> EmailServiceImpl {
        let config = Config::default();
        let client = Arc::new(AsyncResendClientImpl::new(ResendClient::new(&config)))
            as Arc<dyn AsyncResendClient>;
        EmailServiceImpl::new(client, RetryExecutor::new(RetryPolicy::default())).unwrap()
    }

    #[tokio::test]
    async fn test_missing_destination_fails_first() {
        let config = EmailConfig {
            api_key: "re_key".to_string(),
            ..Default::default()
        };
        // Input is also invalid; configuration is checked first.
        let input = EmailRequest {
            email: "bad".to_string(),
            ..Default::default()
        };

        match service().send_email(input, &config).await {
            Err(ServiceError::MissingConfig(var)) => assert_eq!(var, "TO_EMAIL_ADDRESS"),
            other => panic!("Expected MissingConfig, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_email_rejected() {
        let config = EmailConfig {
            api_key: "re_key".to_string(),
            to_address: "inbox@example.com".to_string(),
            ..Default::default()
        };
        let input = EmailRequest {
            email: "bad".to_string(),
            ..Default::default()
        };

        match service().send_email(input, &config).await {
            Err(ServiceError::Validation(ValidationError::MalformedEmail(email))) => {
                assert_eq!(email, "bad")
            }
            other => panic!("Expected MalformedEmail, got: {:?}", other),
        }
    }
}
