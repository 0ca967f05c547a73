//! Telemetry Module for ERC Sentry
//!
//! Collects anonymous in-process counters for the /stats endpoint and the
//! shutdown summary. Privacy-first: no scanned source, no project
//! descriptions, no recommendation payloads are ever stored; only counts
//! and latencies.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Aggregated statistics for reporting
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TelemetryStats {
    /// Total scan invocations
    pub scans_total: u64,
    /// Scan hits carrying a risk classification
    pub risky_hits_total: u64,
    /// Total compatibility lookups
    pub comparisons_total: u64,
    /// Total successful AI recommendations
    pub recommendations_total: u64,
    /// Failed gateway round-trips (any error kind)
    pub gateway_failures_total: u64,
    /// Average request latency across recorded operations (ms)
    pub avg_latency_ms: f64,
}

/// Lock-free counter collector shared across handlers
#[derive(Debug, Default)]
pub struct TelemetryCollector {
    scans: AtomicU64,
    risky_hits: AtomicU64,
    comparisons: AtomicU64,
    recommendations: AtomicU64,
    gateway_failures: AtomicU64,
    latency_total_ms: AtomicU64,
    latency_samples: AtomicU64,
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scan and how many of its hits carried a risk tier.
    pub fn record_scan(&self, risky_hits: u64, latency_ms: u64) {
        self.scans.fetch_add(1, Ordering::Relaxed);
        self.risky_hits.fetch_add(risky_hits, Ordering::Relaxed);
        self.record_latency(latency_ms);
    }

    pub fn record_comparison(&self, latency_ms: u64) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
        self.record_latency(latency_ms);
    }

    pub fn record_recommendation(&self, latency_ms: u64) {
        self.recommendations.fetch_add(1, Ordering::Relaxed);
        self.record_latency(latency_ms);
    }

    pub fn record_gateway_failure(&self) {
        self.gateway_failures.fetch_add(1, Ordering::Relaxed);
    }

    fn record_latency(&self, latency_ms: u64) {
        self.latency_total_ms.fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_samples.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters. Not a transaction: concurrent writers may
    /// land between reads, which is acceptable for monitoring output.
    pub fn get_stats(&self) -> TelemetryStats {
        let samples = self.latency_samples.load(Ordering::Relaxed);
        let total = self.latency_total_ms.load(Ordering::Relaxed);
        TelemetryStats {
            scans_total: self.scans.load(Ordering::Relaxed),
            risky_hits_total: self.risky_hits.load(Ordering::Relaxed),
            comparisons_total: self.comparisons.load(Ordering::Relaxed),
            recommendations_total: self.recommendations.load(Ordering::Relaxed),
            gateway_failures_total: self.gateway_failures.load(Ordering::Relaxed),
            avg_latency_ms: if samples == 0 {
                0.0
            } else {
                total as f64 / samples as f64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let telemetry = TelemetryCollector::new();
        telemetry.record_scan(2, 10);
        telemetry.record_scan(0, 30);
        telemetry.record_comparison(20);
        telemetry.record_recommendation(40);
        telemetry.record_gateway_failure();

        let stats = telemetry.get_stats();
        assert_eq!(stats.scans_total, 2);
        assert_eq!(stats.risky_hits_total, 2);
        assert_eq!(stats.comparisons_total, 1);
        assert_eq!(stats.recommendations_total, 1);
        assert_eq!(stats.gateway_failures_total, 1);
        assert!((stats.avg_latency_ms - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_stats_have_zero_latency() {
        let stats = TelemetryCollector::new().get_stats();
        assert_eq!(stats.avg_latency_ms, 0.0);
    }
}
