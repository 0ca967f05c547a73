//! Type definitions for ERC Sentry
//! Core data structures for the standards catalog and scan results

use serde::{Deserialize, Serialize};

/// Risk tier classification for a standard's health record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// Known exploit vector - do not ship without mitigation
    Critical,
    /// Likely to lose funds or brick contracts in common setups
    High,
    /// Proceed with caution - known footguns
    Medium,
    /// Minor concerns, mitigations well understood
    Low,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Critical => "CRITICAL",
            RiskTier::High => "HIGH",
            RiskTier::Medium => "MEDIUM",
            RiskTier::Low => "LOW",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskTier::Critical => "💀",
            RiskTier::High => "🔴",
            RiskTier::Medium => "🟠",
            RiskTier::Low => "🟡",
        }
    }

    /// Sort rank: critical sorts first
    pub fn rank(&self) -> u8 {
        match self {
            RiskTier::Critical => 0,
            RiskTier::High => 1,
            RiskTier::Medium => 2,
            RiskTier::Low => 3,
        }
    }
}

/// One entry in the static standards catalog.
/// Identified by the bare numeric string ("20", "721", "4626", ...).
#[derive(Debug, Clone, Serialize)]
pub struct StandardRecord {
    /// Bare numeric identifier, e.g. "777"
    pub id: &'static str,
    /// Canonical display name, e.g. "ERC-777"
    pub name: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    /// Feature tags ("fungible", "hooks", "permit", ...)
    pub features: &'static [&'static str],
    /// Typical project descriptions this standard serves
    pub use_cases: &'static [&'static str],
    /// Identifiers of related standards
    pub related: &'static [&'static str],
}

/// Curated risk classification for a standard
#[derive(Debug, Clone, Serialize)]
pub struct HealthRecord {
    /// Standard this record classifies
    pub standard_id: &'static str,
    pub tier: RiskTier,
    /// Why the standard carries this tier
    pub rationale: &'static str,
    /// Suggested replacement standard, if one exists
    pub replacement: Option<&'static str>,
}

/// Compatibility classification between a pair of standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompatLevel {
    /// One standard mandates the other
    Required,
    /// Work together without friction
    Compatible,
    /// Combination works but has known footguns
    Caution,
    /// Combining them in one contract is a design error
    Incompatible,
    /// No curated data for this pair
    NotAvailable,
}

impl CompatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatLevel::Required => "required",
            CompatLevel::Compatible => "compatible",
            CompatLevel::Caution => "caution",
            CompatLevel::Incompatible => "incompatible",
            CompatLevel::NotAvailable => "not-available",
        }
    }
}

/// Hand-curated rule for an unordered pair of standards
#[derive(Debug, Clone)]
pub struct CompatibilityRule {
    pub first: &'static str,
    pub second: &'static str,
    pub level: CompatLevel,
    pub rationale: &'static str,
}

/// Result of a compatibility lookup, always resolvable
#[derive(Debug, Clone, Serialize)]
pub struct CompatVerdict {
    pub first: String,
    pub second: String,
    pub level: CompatLevel,
    pub rationale: String,
    /// False when the default no-data verdict was returned
    pub curated: bool,
}

/// Maximum line numbers reported per scan hit
pub const MAX_HIT_LINES: usize = 5;

/// One detected standard in a scanned source blob.
/// Transient: produced per scan call, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScanHit {
    pub standard_id: String,
    pub standard_name: String,
    /// Total matches across the whole input
    pub match_count: usize,
    /// Up to [`MAX_HIT_LINES`] 1-indexed line numbers, first-found order
    pub lines: Vec<usize>,
    /// Risk tier when a health record exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<RiskTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    /// True for standards on the curated known-safe list
    pub known_safe: bool,
}

/// Gas cost profile for deploying/operating a standard
#[derive(Debug, Clone, Serialize)]
pub struct GasProfile {
    pub standard_id: &'static str,
    /// Rough deployment cost in gas units
    pub deploy_gas: u64,
    /// (operation, gas) estimates for the hot paths
    pub operations: &'static [(&'static str, u64)],
    pub note: &'static str,
}

/// L2 / cross-chain readiness notes for a standard
#[derive(Debug, Clone, Serialize)]
pub struct L2Support {
    pub standard_id: &'static str,
    /// (network, note) per rollup
    pub networks: &'static [(&'static str, &'static str)],
}

/// Structured recommendation returned by the AI gateway.
/// Transient: produced per query, not cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiRecommendation {
    /// Bare numeric identifier strings, e.g. ["20", "2612"]
    #[serde(rename = "ercNumbers")]
    pub erc_numbers: Vec<String>,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tier_ordering() {
        assert!(RiskTier::Critical.rank() < RiskTier::High.rank());
        assert!(RiskTier::High.rank() < RiskTier::Medium.rank());
        assert!(RiskTier::Medium.rank() < RiskTier::Low.rank());
    }

    #[test]
    fn test_compat_level_strings() {
        assert_eq!(CompatLevel::NotAvailable.as_str(), "not-available");
        assert_eq!(CompatLevel::Incompatible.as_str(), "incompatible");
    }
}
