//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating inbound requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The email field is empty or whitespace-only.
    EmptyEmail,

    /// The email field does not parse as an address.
    MalformedEmail(String),

    /// A provider identifier is empty.
    EmptyId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email cannot be empty"),
            Self::MalformedEmail(email) => write!(f, "email is not valid: {}", email),
            Self::EmptyId => write!(f, "ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
