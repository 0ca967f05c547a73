//! API Request Handlers

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::types::*;
use crate::catalog;
use crate::core::{compat, recommend, scanner};
use crate::models::config::SentryConfig;
use crate::models::errors::AppError;
use crate::models::types::AiRecommendation;
use crate::providers::gateway::GatewayClient;
use crate::utils::telemetry::TelemetryCollector;

/// Shared application state
pub struct AppState {
    pub telemetry: Arc<TelemetryCollector>,
    pub gateway: GatewayClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &SentryConfig, telemetry: Arc<TelemetryCollector>) -> Self {
        Self {
            telemetry,
            gateway: GatewayClient::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Map an application error onto the envelope error tuple.
fn error_tuple(error: &AppError, start: Instant) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::from_u16(error.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ApiResponse::error(
            ApiError::from_app(error),
            start.elapsed().as_secs_f64() * 1000.0,
        )),
    )
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Source Scan
// ============================================

pub async fn scan_source(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScanRequest>,
) -> Json<ApiResponse<ScanData>> {
    let start = Instant::now();

    let hits = scanner::scan(&req.source);
    let risky_count = hits.iter().filter(|h| h.tier.is_some()).count();

    let summary = if hits.is_empty() {
        "No standard patterns detected.".to_string()
    } else if risky_count > 0 {
        format!(
            "{} standard(s) detected, {} with known risk. Matching is literal; \
             hits inside comments or strings are possible.",
            hits.len(),
            risky_count
        )
    } else {
        format!(
            "{} standard(s) detected, none with known risk. Matching is \
             literal; hits inside comments or strings are possible.",
            hits.len()
        )
    };

    let latency_ms = start.elapsed().as_millis() as u64;
    state.telemetry.record_scan(risky_count as u64, latency_ms);

    if risky_count > 0 {
        info!("🔍 Scan flagged {} risky standard(s)", risky_count);
    }

    let data = ScanData {
        distinct_standards: hits.len(),
        risky_count,
        hits,
        summary,
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

// ============================================
// Compatibility Comparison
// ============================================

pub async fn compare_standards(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CompareRequest>,
) -> Result<
    Json<ApiResponse<crate::models::types::CompatVerdict>>,
    (StatusCode, Json<ApiResponse<()>>),
> {
    let start = Instant::now();

    let verdict = compat::compare(&req.first, &req.second)
        .map_err(|e| error_tuple(&e, start))?;

    state
        .telemetry
        .record_comparison(start.elapsed().as_millis() as u64);

    Ok(Json(ApiResponse::success(
        verdict,
        start.elapsed().as_secs_f64() * 1000.0,
    )))
}

// ============================================
// Catalog Browse
// ============================================

fn summarize(standard: &'static crate::models::types::StandardRecord) -> StandardSummary {
    StandardSummary {
        id: standard.id,
        name: standard.name,
        title: standard.title,
        category: standard.category,
        summary: standard.summary,
        tier: catalog::get_health(standard.id).map(|h| h.tier),
        known_safe: catalog::is_known_safe(standard.id),
    }
}

pub async fn list_standards(
    Query(query): Query<StandardsQuery>,
) -> Json<ApiResponse<Vec<StandardSummary>>> {
    let start = Instant::now();

    let records: Vec<&'static crate::models::types::StandardRecord> =
        match (&query.category, &query.q) {
            (Some(category), _) => catalog::standards_by_category(category),
            (None, Some(q)) => catalog::search_standards(q),
            (None, None) => catalog::all_standards().iter().collect(),
        };

    let summaries: Vec<StandardSummary> = records.into_iter().map(summarize).collect();

    Json(ApiResponse::success(
        summaries,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}

pub async fn standard_detail(
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<StandardDetail>>, (StatusCode, Json<ApiResponse<()>>)> {
    let start = Instant::now();

    let standard = catalog::get_standard(&id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(
                ApiError::not_found(format!("Unknown standard: {}", id)),
                start.elapsed().as_secs_f64() * 1000.0,
            )),
        )
    })?;

    let related = standard
        .related
        .iter()
        .filter_map(|rid| catalog::get_standard(rid))
        .map(summarize)
        .collect();

    let data = StandardDetail {
        standard,
        health: catalog::get_health(standard.id),
        gas: catalog::get_gas_profile(standard.id),
        l2: catalog::get_l2_support(standard.id),
        known_safe: catalog::is_known_safe(standard.id),
        related,
    };

    Ok(Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    )))
}

// ============================================
// AI Recommendation
// ============================================

/// The recommendation proxy. Keeps the original flat wire contract:
/// `{ ercNumbers, reasoning }` on success, `{ error }` plus status code
/// on failure (400 bad input, 429 rate-limited, 402 payment required,
/// 504 timeout, 500 otherwise).
pub async fn recommend_standards(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<AiRecommendation>, (StatusCode, Json<RecommendErrorBody>)> {
    let start = Instant::now();

    // Reject missing/non-string/empty input before any network call.
    let description = req.description_str().unwrap_or("");
    if description.trim().is_empty() {
        let error = AppError::invalid_argument("description must be a non-empty string");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(RecommendErrorBody {
                error: error.message,
            }),
        ));
    }

    match recommend::recommend(&state.gateway, description).await {
        Ok(recommendation) => {
            state
                .telemetry
                .record_recommendation(start.elapsed().as_millis() as u64);
            info!(
                "🤖 Recommendation returned {} standard(s)",
                recommendation.erc_numbers.len()
            );
            Ok(Json(recommendation))
        }
        Err(error) => {
            state.telemetry.record_gateway_failure();
            warn!(code = %error.code_str(), "Recommendation failed: {}", error.message);
            Err((
                StatusCode::from_u16(error.code.http_status())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(RecommendErrorBody {
                    error: error.message,
                }),
            ))
        }
    }
}

// ============================================
// Stats
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatsData>> {
    let start = Instant::now();

    let data = StatsData {
        telemetry: state.telemetry.get_stats(),
        uptime_seconds: state.uptime_seconds(),
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Json(ApiResponse::success(
        data,
        start.elapsed().as_secs_f64() * 1000.0,
    ))
}
