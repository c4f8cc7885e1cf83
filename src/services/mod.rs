//! Application service layer.
//!
//! Services gate each provider call behind configuration and input checks,
//! then run the call through a shared [`RetryExecutor`](crate::retry::RetryExecutor).

mod contact_service;
mod email_service;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use email_service::{EmailService, EmailServiceImpl};
