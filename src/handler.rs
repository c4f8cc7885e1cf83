//! Entry point adapter: decoded event in, status plus message out.
//!
//! Hosts map [`Response::status_code`] onto their own transport. Validation
//! failures are 400, configuration and provider failures 500.

use crate::config::{ContactConfig, EmailConfig};
use crate::error::ServiceError;
use crate::models::{ContactRequest, EmailRequest};
use crate::services::{ContactService, EmailService};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Body returned when adding a contact fails on the provider side.
pub const ADD_CONTACT_FAILED: &str = "Failed to add contact";

/// Body returned when sending an email fails on the provider side.
pub const SEND_EMAIL_FAILED: &str = "Failed to send email";

/// Body returned when the email body cannot be rendered.
pub const HTML_CONTENT_FAILED: &str = "Failed to construct HTML content";

/// Result object handed back to the invoking platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Map a service error, using `failure` for provider-side failures so
    /// internal details are not echoed to the caller.
    pub fn from_service_error(error: &ServiceError, failure: &str) -> Self {
        let body = match error {
            ServiceError::Validation(_) | ServiceError::MissingConfig(_) => error.to_string(),
            ServiceError::Template(_) => HTML_CONTENT_FAILED.to_string(),
            ServiceError::RetriesExhausted { .. } | ServiceError::Cancelled { .. } => {
                failure.to_string()
            }
        };
        Self {
            status_code: error.status_code(),
            body,
        }
    }
}

/// Decode a raw JSON event, producing a 400 response when it is malformed.
pub fn decode_event<T: DeserializeOwned>(raw: &str) -> Result<T, Response> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::error!(error = %e, "Invalid event data");
        Response {
            status_code: 400,
            body: format!("invalid event: {}", e),
        }
    })
}

/// Run an add-contact event through the service.
pub async fn handle_add_contact(
    service: &dyn ContactService,
    event: ContactRequest,
    config: &ContactConfig,
) -> Response {
    match service.add_contact(event, config).await {
        Ok(_) => Response::ok("Contact added successfully"),
        Err(e) => {
            tracing::error!(error = %e, "{}", ADD_CONTACT_FAILED);
            Response::from_service_error(&e, ADD_CONTACT_FAILED)
        }
    }
}

/// Run a contact-form event through the email service.
pub async fn handle_send_email(
    service: &dyn EmailService,
    event: EmailRequest,
    config: &EmailConfig,
) -> Response {
    match service.send_email(event, config).await {
        Ok(_) => Response::ok("Email sent successfully"),
        Err(e) => {
            tracing::error!(error = %e, "{}", SEND_EMAIL_FAILED);
            Response::from_service_error(&e, SEND_EMAIL_FAILED)
        }
    }
}
