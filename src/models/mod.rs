//! Data models for inbound events and Resend API payloads.

pub mod contact;
pub mod email;

pub use contact::{ContactRequest, CreateContactRequest, CreatedContact};
pub use email::{EmailRequest, SendEmailRequest, SentEmail, CONTACT_FORM_SUBJECT};
