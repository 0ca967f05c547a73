//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;
use crate::models::types::{RiskTier, ScanHit};
use crate::utils::telemetry::TelemetryStats;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Carry an application error to the wire: unique code for logs,
    /// human message for the client.
    pub fn from_app(error: &AppError) -> Self {
        Self {
            code: error.code_str().to_string(),
            message: error.message.clone(),
            details: None,
        }
    }
}

// ============================================
// Source Scan
// ============================================

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct ScanData {
    pub hits: Vec<ScanHit>,
    /// Distinct standards detected
    pub distinct_standards: usize,
    /// Hits carrying a risk classification
    pub risky_count: usize,
    /// Terminal display message ("no patterns detected" is a valid
    /// result, not an error)
    pub summary: String,
}

// ============================================
// Compatibility Comparison
// ============================================

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub first: String,
    pub second: String,
}

// ============================================
// Catalog Browse
// ============================================

#[derive(Debug, Deserialize, Default)]
pub struct StandardsQuery {
    /// Filter by category name (case-insensitive)
    pub category: Option<String>,
    /// Free-text search over name/title/summary/tags
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StandardSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<RiskTier>,
    pub known_safe: bool,
}

#[derive(Debug, Serialize)]
pub struct StandardDetail {
    pub standard: &'static crate::models::types::StandardRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<&'static crate::models::types::HealthRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<&'static crate::models::types::GasProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2: Option<&'static crate::models::types::L2Support>,
    pub known_safe: bool,
    pub related: Vec<StandardSummary>,
}

// ============================================
// AI Recommendation
// ============================================

/// Raw request body for /recommend. The description is kept as a raw
/// JSON value so a missing field, a number, or a null can all be
/// rejected as InvalidArgument (400) rather than a framework-level
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub description: serde_json::Value,
}

impl RecommendRequest {
    /// The description when it is a string, regardless of emptiness.
    pub fn description_str(&self) -> Option<&str> {
        self.description.as_str()
    }
}

/// Flat error body for /recommend, preserving the wire contract of the
/// original recommendation endpoint.
#[derive(Debug, Serialize)]
pub struct RecommendErrorBody {
    pub error: String,
}

// ============================================
// Stats / Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct StatsData {
    #[serde(flatten)]
    pub telemetry: TelemetryStats,
    pub uptime_seconds: u64,
    pub api_version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
