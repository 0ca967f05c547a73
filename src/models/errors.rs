//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so production logs can be
//! grepped and alerted on without parsing free-form messages.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - ARG_xxx: caller input errors
//! - CFG_xxx: configuration errors
//! - GATEWAY_xxx: upstream AI gateway errors
//! - CATALOG_xxx: static table integrity errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Caller Input Errors
    // ============================================
    /// Bad or missing input, rejected before any work
    InvalidArgument,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Required upstream credential absent from environment
    ConfigurationError,
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // AI Gateway Errors
    // ============================================
    /// Upstream reported rate-limit status (HTTP 429)
    RateLimited,
    /// Upstream reported quota/billing exhaustion (HTTP 402)
    PaymentRequired,
    /// Any other non-success upstream response
    UpstreamError,
    /// Upstream returned success but the forced tool-call payload
    /// was absent or malformed
    ProtocolError,
    /// Outbound call exceeded the bounded timeout
    Timeout,

    // ============================================
    // Catalog Errors
    // ============================================
    /// A static table references a standard missing from the catalog
    CatalogIntegrity,

    // ============================================
    // Generic
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "ARG_INVALID",
            Self::ConfigurationError => "CFG_MISSING_CREDENTIAL",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::RateLimited => "GATEWAY_RATE_LIMITED",
            Self::PaymentRequired => "GATEWAY_PAYMENT_REQUIRED",
            Self::UpstreamError => "GATEWAY_UPSTREAM_ERROR",
            Self::ProtocolError => "GATEWAY_PROTOCOL_ERROR",
            Self::Timeout => "GATEWAY_TIMEOUT",
            Self::CatalogIntegrity => "CATALOG_INTEGRITY",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidArgument => 400,
            Self::PaymentRequired => 402,
            Self::RateLimited => 429,
            Self::Timeout => 504,
            _ => 500,
        }
    }

    /// Check if the caller may reasonably retry with backoff.
    /// Nothing is retried internally; this is advisory for clients.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Timeout)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Bad or missing caller input
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, msg)
    }

    /// Missing upstream credential
    pub fn missing_credential(var_name: &str) -> Self {
        Self::new(
            ErrorCode::ConfigurationError,
            format!("Missing required environment variable: {}", var_name),
        )
    }

    /// Upstream rate limit hit
    pub fn rate_limited() -> Self {
        Self::new(
            ErrorCode::RateLimited,
            "AI gateway rate limit exceeded. Retry with backoff.",
        )
    }

    /// Upstream quota/billing exhausted
    pub fn payment_required() -> Self {
        Self::new(
            ErrorCode::PaymentRequired,
            "AI gateway quota exhausted. Check upstream billing.",
        )
    }

    /// Opaque upstream failure
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamError, msg)
    }

    /// Malformed or missing structured response
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProtocolError, msg)
    }

    /// Outbound call timed out
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, msg)
    }

    /// Static table referential integrity violation
    pub fn catalog_integrity(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogIntegrity, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::Timeout, "AI gateway request timed out")
        } else {
            Self::with_source(ErrorCode::UpstreamError, "AI gateway request failed", err)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ProtocolError, "Malformed JSON payload", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::rate_limited();
        assert_eq!(err.code, ErrorCode::RateLimited);
        assert_eq!(err.code_str(), "GATEWAY_RATE_LIMITED");
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorCode::RateLimited.is_retryable());
        assert!(ErrorCode::Timeout.is_retryable());
        assert!(!ErrorCode::ConfigurationError.is_retryable());
        assert!(!ErrorCode::ProtocolError.is_retryable());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::InvalidArgument.http_status(), 400);
        assert_eq!(ErrorCode::PaymentRequired.http_status(), 402);
        assert_eq!(ErrorCode::RateLimited.http_status(), 429);
        assert_eq!(ErrorCode::Timeout.http_status(), 504);
        assert_eq!(ErrorCode::UpstreamError.http_status(), 500);
        assert_eq!(ErrorCode::ConfigurationError.http_status(), 500);
    }
}
