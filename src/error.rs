//! Error types for the contact relay.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use crate::retry::RetryError;
use thiserror::Error;

/// Errors that can occur when interacting with the Resend API.
///
/// Every variant is treated as retryable by the services; transient and
/// permanent provider failures are not distinguished at this layer.
#[derive(Error, Debug)]
pub enum ResendApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The provider rejected the request payload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Terminal errors produced by the contact and email services.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The inbound request failed validation. Never retried.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A required configuration value is absent. Never retried.
    #[error("{0} environment variable is not set")]
    MissingConfig(String),

    /// The HTML body could not be rendered.
    #[error("Failed to construct HTML content: {0}")]
    Template(String),

    /// Every attempt against the provider failed.
    #[error("Provider call failed after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        #[source]
        last_error: ResendApiError,
        attempts: u32,
    },

    /// Retrying was aborted by an external cancellation signal.
    #[error("Provider call cancelled after {attempts} attempts")]
    Cancelled { attempts: u32 },
}

impl ServiceError {
    /// Transport status code for this error: client input failures map to 400,
    /// configuration and dependency failures to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::MissingConfig(_)
            | Self::Template(_)
            | Self::RetriesExhausted { .. }
            | Self::Cancelled { .. } => 500,
        }
    }

    /// Whether the error was caused by client input rather than the server side.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

impl From<RetryError<ResendApiError>> for ServiceError {
    fn from(error: RetryError<ResendApiError>) -> Self {
        match error {
            RetryError::Exhausted {
                last_error,
                attempts,
            } => Self::RetriesExhausted {
                last_error,
                attempts,
            },
            RetryError::Cancelled { attempts, .. } => Self::Cancelled { attempts },
        }
    }
}

/// Convenience type alias for Results with ResendApiError
pub type ResendApiResult<T> = Result<T, ResendApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
