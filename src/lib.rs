//! ERC Sentry Library
//!
//! Knowledge-base service for token/contract standards:
//! - Static hand-curated catalog with risk, gas, and L2 annotations
//! - Pattern scanner flagging risky standard usage in pasted source
//! - Symmetric compatibility-rule lookup between standard pairs
//! - AI recommendation proxy with a forced function-call schema

pub mod api;
pub mod catalog;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use catalog::{
    all_standards, categories, get_gas_profile, get_health, get_l2_support, get_standard,
    is_known_safe, is_known_standard, search_standards, standards_by_category, validate_catalog,
};
pub use crate::core::{build_system_prompt, compare, recommend, scan};
pub use models::config::SentryConfig;
pub use models::errors::{AppError, AppResult, ErrorCode};
pub use models::types::{
    AiRecommendation, CompatLevel, CompatVerdict, CompatibilityRule, GasProfile, HealthRecord,
    L2Support, RiskTier, ScanHit, StandardRecord,
};
pub use providers::gateway::GatewayClient;
pub use utils::telemetry::{TelemetryCollector, TelemetryStats};
