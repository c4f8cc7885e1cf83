//! Domain value objects and validation.
//!
//! This module contains type-safe wrappers for provider identifiers and
//! email addresses, plus the validation policies that gate every provider
//! call. Value objects validate at construction time so invalid data
//! cannot be represented past this boundary.

pub mod email;
pub mod errors;
pub mod ids;
pub mod validation;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use ids::{ContactId, EmailId};
pub use validation::{validate_contact, validate_email};
