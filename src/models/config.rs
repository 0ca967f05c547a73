//! Configuration module for ERC Sentry
//!
//! All runtime knobs are read from the process environment once at
//! startup. The gateway credential is the exception: it is re-read per
//! request so a rotated key takes effect without a restart, and it is
//! never logged.

use std::time::Duration;

use crate::models::errors::{AppError, AppResult};

/// Environment variable holding the AI gateway credential
pub const GATEWAY_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default base URL for the OpenAI-compatible chat completions gateway
pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model
pub const DEFAULT_GATEWAY_MODEL: &str = "gpt-4o-mini";

/// Default bound on the one outbound gateway call (seconds)
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Sentry API server
#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Base URL of the chat-completion gateway
    pub gateway_base_url: String,
    /// Model requested from the gateway
    pub gateway_model: String,
    /// Bounded timeout around the outbound gateway call
    pub gateway_timeout: Duration,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("SENTRY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // Railway-style deployments inject PORT; SENTRY_PORT for local dev
            port: std::env::var("PORT")
                .or_else(|_| std::env::var("SENTRY_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            gateway_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_BASE_URL.to_string()),
            gateway_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_MODEL.to_string()),
            gateway_timeout: Duration::from_secs(
                std::env::var("GATEWAY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_GATEWAY_TIMEOUT_SECS),
            ),
        }
    }
}

impl SentryConfig {
    /// Read the gateway credential from the environment.
    /// Absence is a fatal configuration error for the request.
    pub fn gateway_key() -> AppResult<String> {
        match std::env::var(GATEWAY_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(AppError::missing_credential(GATEWAY_KEY_ENV)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SentryConfig::default();
        assert!(!config.gateway_base_url.is_empty());
        assert!(!config.gateway_model.is_empty());
        assert!(config.gateway_timeout.as_secs() > 0);
    }
}
