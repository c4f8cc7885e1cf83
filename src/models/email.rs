//! Email models: the inbound contact-form event and the Resend wire types.

use crate::domain::EmailId;
use serde::{Deserialize, Serialize};

/// Subject line used for every contact-form submission.
pub const CONTACT_FORM_SUBJECT: &str = "Contact Form Submission";

/// Inbound contact-form event that is forwarded as an email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    /// Sender's email address (required, must parse as an address)
    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Free-form message body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request body for `POST /emails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

impl SendEmailRequest {
    /// Build a contact-form submission addressed to a single recipient.
    pub fn contact_form(from: &str, to: &str, html: String) -> Self {
        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            subject: CONTACT_FORM_SUBJECT.to_string(),
            html,
        }
    }
}

/// Response body of an accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    pub id: EmailId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_request_deserialization() {
        let json = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "message": "Hi there"
        }"#;
        let request: EmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.first_name.as_deref(), Some("Ada"));
        assert_eq!(request.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(request.message.as_deref(), Some("Hi there"));
    }

    #[test]
    fn test_contact_form_request() {
        let request = SendEmailRequest::contact_form(
            "Acme <onboarding@resend.dev>",
            "inbox@example.com",
            "<p>hi</p>".to_string(),
        );
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["to"], serde_json::json!(["inbox@example.com"]));
        assert_eq!(body["subject"], "Contact Form Submission");
        assert_eq!(body["html"], "<p>hi</p>");
    }
}
