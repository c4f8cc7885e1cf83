//! Configuration management for the contact relay.
//!
//! This module loads configuration from environment variables. Provider
//! credentials and addresses are optional at load time: each service checks
//! the values it needs and fails with `MissingConfig` before any network call.

use crate::error::{ConfigError, ConfigResult, ServiceError, ServiceResult};
use crate::retry::RetryPolicy;
use std::env;
use std::time::Duration;

/// Default sender used when `FROM_EMAIL_ADDRESS` is unset.
pub const DEFAULT_FROM_ADDRESS: &str = "Acme <onboarding@resend.dev>";

/// Default Resend API base URL.
pub const DEFAULT_API_URL: &str = "https://api.resend.com";

/// Configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API base URL
    pub resend_api_url: String,

    /// Resend API key (may be empty; checked per operation)
    pub resend_api_key: String,

    /// Audience that new contacts are added to
    pub audience_id: String,

    /// Destination address for contact-form emails
    pub to_address: String,

    /// Sender address for contact-form emails
    pub from_address: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Maximum provider attempts per invocation (default: 5)
    pub retry_max_attempts: u32,

    /// Backoff time unit in milliseconds (default: 1)
    pub retry_base_delay_ms: u64,

    /// Inclusive jitter ceiling in milliseconds (default: 999)
    pub retry_jitter_ms: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

/// Settings required to add a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactConfig {
    pub api_key: String,
    pub audience_id: String,
}

impl ContactConfig {
    /// Fail with `MissingConfig` if any required value is blank.
    pub fn ensure_complete(&self) -> ServiceResult<()> {
        require("RESEND_API_KEY", &self.api_key)?;
        require("AUDIENCE_ID", &self.audience_id)
    }
}

/// Settings required to send a contact-form email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_key: String,
    pub to_address: String,
    pub from_address: String,
}

impl EmailConfig {
    /// Fail with `MissingConfig` if any required value is blank.
    pub fn ensure_complete(&self) -> ServiceResult<()> {
        require("RESEND_API_KEY", &self.api_key)?;
        require("TO_EMAIL_ADDRESS", &self.to_address)?;
        require("FROM_EMAIL_ADDRESS", &self.from_address)
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            to_address: String::new(),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
        }
    }
}

fn require(var: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::MissingConfig(var.to_string()));
    }
    Ok(())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Per-operation variables (checked when the operation runs):
    /// - `RESEND_API_KEY`: API key (the older `RESEND_API` name is also accepted)
    /// - `AUDIENCE_ID`: audience for new contacts
    /// - `TO_EMAIL_ADDRESS`: destination for contact-form emails
    ///
    /// Optional environment variables:
    /// - `FROM_EMAIL_ADDRESS`: sender (default: "Acme <onboarding@resend.dev>")
    /// - `RESEND_API_BASE_URL`: API base URL (default: "https://api.resend.com")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `RETRY_MAX_ATTEMPTS`: attempts per call, at least 1 (default: 5)
    /// - `RETRY_BASE_DELAY_MS`: backoff time unit (default: 1)
    /// - `RETRY_JITTER_MS`: jitter ceiling (default: 999)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let resend_api_url =
            env::var("RESEND_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !resend_api_url.starts_with("http://") && !resend_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let resend_api_key = env::var("RESEND_API_KEY")
            .or_else(|_| env::var("RESEND_API"))
            .unwrap_or_default();
        let audience_id = env::var("AUDIENCE_ID").unwrap_or_default();
        let to_address = env::var("TO_EMAIL_ADDRESS").unwrap_or_default();
        let from_address =
            env::var("FROM_EMAIL_ADDRESS").unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let retry_max_attempts = Self::parse_env_u32("RETRY_MAX_ATTEMPTS", 5)?;
        let retry_base_delay_ms = Self::parse_env_u64("RETRY_BASE_DELAY_MS", 1)?;
        let retry_jitter_ms = Self::parse_env_u64("RETRY_JITTER_MS", 999)?;

        if retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                var: "RETRY_MAX_ATTEMPTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            resend_api_url,
            resend_api_key,
            audience_id,
            to_address,
            from_address,
            request_timeout,
            retry_max_attempts,
            retry_base_delay_ms,
            retry_jitter_ms,
            log_level,
        })
    }

    /// Settings for the add-contact operation.
    pub fn contact_config(&self) -> ContactConfig {
        ContactConfig {
            api_key: self.resend_api_key.clone(),
            audience_id: self.audience_id.clone(),
        }
    }

    /// Settings for the send-email operation.
    pub fn email_config(&self) -> EmailConfig {
        EmailConfig {
            api_key: self.resend_api_key.clone(),
            to_address: self.to_address.clone(),
            from_address: self.from_address.clone(),
        }
    }

    /// Retry policy shared by both operations.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts,
            Duration::from_millis(self.retry_base_delay_ms),
            Duration::from_millis(self.retry_jitter_ms),
        )
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_url: DEFAULT_API_URL.to_string(),
            resend_api_key: String::new(),
            audience_id: String::new(),
            to_address: String::new(),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            request_timeout: 10,
            retry_max_attempts: 5,
            retry_base_delay_ms: 1,
            retry_jitter_ms: 999,
            log_level: "info".to_string(),
        }
    }
}
