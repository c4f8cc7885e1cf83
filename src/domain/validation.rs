//! Validation policies applied before any provider call.
//!
//! Both checks are pure; they never touch configuration or the network.

use super::email::EmailAddress;
use super::errors::ValidationError;
use crate::models::{ContactRequest, EmailRequest};

/// Validate an add-contact request.
///
/// Only presence of the email is required; the provider performs its own
/// address checks when the contact is created.
pub fn validate_contact(input: &ContactRequest) -> Result<(), ValidationError> {
    if input.email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    Ok(())
}

/// Validate a contact-form email request.
///
/// Empty input reports `EmptyEmail` ahead of any syntax check.
pub fn validate_email(input: &EmailRequest) -> Result<(), ValidationError> {
    EmailAddress::parse(&input.email).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(email: &str) -> ContactRequest {
        ContactRequest {
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn email_request(email: &str) -> EmailRequest {
        EmailRequest {
            email: email.to_string(),
            message: Some("Hello".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_email_rejected_by_both() {
        for blank in ["", " ", "\t\n", "   "] {
            assert_eq!(validate_contact(&contact(blank)), Err(ValidationError::EmptyEmail));
            assert_eq!(
                validate_email(&email_request(blank)),
                Err(ValidationError::EmptyEmail)
            );
        }
    }

    #[test]
    fn test_contact_accepts_any_non_empty_email() {
        assert!(validate_contact(&contact("a@b.com")).is_ok());
        // Syntax is left to the provider for contacts.
        assert!(validate_contact(&contact("not-an-email")).is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in ["not-an-email", "a@", "bad", "a b@example.com"] {
            assert!(
                matches!(
                    validate_email(&email_request(bad)),
                    Err(ValidationError::MalformedEmail(_))
                ),
                "{bad} should be malformed"
            );
        }
    }

    #[test]
    fn test_rfc5322_mailboxes_accepted() {
        for valid in [
            "\"john doe\"@example.com",
            "Ada <ada@example.com>",
            "üser@example.com",
            "user@[192.168.0.1]",
        ] {
            assert_eq!(validate_email(&email_request(valid)), Ok(()), "{valid} should be valid");
        }
    }

    #[test]
    fn test_valid_email_accepted() {
        assert!(validate_email(&email_request("user@example.com")).is_ok());
        assert!(validate_email(&email_request("first.last+tag@sub.example.org")).is_ok());
    }
}
