//! EmailAddress value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The default options accept the full RFC 5322 mailbox grammar:
/// `Name <addr>`, quoted local parts, domain literals and single-label domains.
fn parse_options() -> email_address::Options {
    email_address::Options::default()
}

/// A type-safe wrapper for email addresses.
///
/// Construction trims surrounding whitespace and parses the value as an
/// RFC 5322 mailbox. A display name, if present, is kept apart from the
/// `local-part "@" domain` address.
///
/// # Example
///
/// ```
/// use contact_relay::domain::EmailAddress;
///
/// let email = EmailAddress::parse("Ada <ada@example.com>").unwrap();
/// assert_eq!(email.as_str(), "ada@example.com");
/// assert_eq!(email.display_name(), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    address: String,
    display_name: Option<String>,
}

impl EmailAddress {
    /// Parse an email address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyEmail` for empty or whitespace-only input
    /// and `ValidationError::MalformedEmail` when the address syntax is invalid.
    pub fn parse(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }

        let parsed = email_address::EmailAddress::parse_with_options(email, parse_options())
            .map_err(|_| ValidationError::MalformedEmail(email.to_string()))?;

        let display_name = Some(parsed.display_part().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self {
            address: parsed.email(),
            display_name,
        })
    }

    /// The display name of a `Name <addr>` mailbox.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Get the bare `local-part@domain` address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Convert into the bare address, dropping any display name.
    pub fn into_inner(self) -> String {
        self.address
    }

    /// Get the local part (before the last '@').
    pub fn local_part(&self) -> &str {
        self.address
            .rsplit_once('@')
            .map(|(local, _)| local)
            .unwrap_or("")
    }

    /// Get the domain part (after the last '@').
    pub fn domain(&self) -> &str {
        self.address
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or("")
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.to_string()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => f.write_str(&self.address),
        }
    }
}
