//! Health Records - Curated Risk Classifications
//!
//! Hand-curated risk tiers for standards with known security history.
//! Standards absent from both tables are simply unclassified; the
//! known-safe list marks the ones vetted as safe so the scanner can say
//! so explicitly instead of staying silent.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::models::types::{HealthRecord, RiskTier};

/// Curated risk classifications, worst first.
pub static HEALTH_RECORDS: &[HealthRecord] = &[
    HealthRecord {
        standard_id: "777",
        tier: RiskTier::Critical,
        rationale: "ERC-1820 receive hooks hand control to the recipient \
                    mid-transfer, enabling the reentrancy pattern behind the \
                    imBTC/Uniswap and dForce drains. Most DeFi integrations \
                    assume ERC-20 semantics and are unsafe with hooks.",
        replacement: Some("20"),
    },
    HealthRecord {
        standard_id: "827",
        tier: RiskTier::High,
        rationale: "approveAndCall forwards arbitrary calldata with the token \
                    contract as msg.sender, letting attackers invoke victim \
                    contracts while impersonating the token. Withdrawn and \
                    unsupported by modern tooling.",
        replacement: Some("20"),
    },
    HealthRecord {
        standard_id: "1822",
        tier: RiskTier::High,
        rationale: "UUPS puts upgrade authority on the implementation; an \
                    uninitialized implementation contract can be claimed and \
                    upgraded by anyone, which has destroyed live proxies. \
                    Requires disciplined initializer locking.",
        replacement: Some("1967"),
    },
    HealthRecord {
        standard_id: "223",
        tier: RiskTier::Medium,
        rationale: "Near-zero ecosystem adoption: the tokenReceived handler is \
                    unknown to ERC-20-only tooling, so transfers to popular \
                    DeFi contracts revert or strand funds.",
        replacement: Some("20"),
    },
    HealthRecord {
        standard_id: "2535",
        tier: RiskTier::Medium,
        rationale: "Facet indirection defeats most verification tooling and \
                    makes storage-layout collisions between facets easy to \
                    introduce during upgrades. Audit cost scales with facet \
                    count.",
        replacement: None,
    },
    HealthRecord {
        standard_id: "4626",
        tier: RiskTier::Low,
        rationale: "Empty vaults are vulnerable to the share-inflation \
                    (donation) attack against the first depositor. Virtual \
                    shares or a seed deposit close the hole.",
        replacement: None,
    },
    HealthRecord {
        standard_id: "3156",
        tier: RiskTier::Low,
        rationale: "The onFlashLoan callback widens the reentrancy surface of \
                    every lender; integrations must treat the borrower callback \
                    as fully adversarial.",
        replacement: None,
    },
];

/// Standards with no health record that are vetted as safe.
/// Scan hits for these report safe explicitly, zero risk annotation.
pub static KNOWN_SAFE: &[&str] = &[
    "20", "165", "173", "712", "721", "1155", "1271", "1967", "2612", "2981",
    "4337", "4907", "5192", "6551",
];

lazy_static! {
    static ref HEALTH_INDEX: HashMap<&'static str, &'static HealthRecord> =
        HEALTH_RECORDS.iter().map(|h| (h.standard_id, h)).collect();
    static ref SAFE_SET: HashSet<&'static str> = KNOWN_SAFE.iter().copied().collect();
}

/// Look up the health record for a standard, if one exists.
pub fn get_health(standard_id: &str) -> Option<&'static HealthRecord> {
    HEALTH_INDEX.get(standard_id).copied()
}

/// True when the standard is on the curated known-safe list.
pub fn is_known_safe(standard_id: &str) -> bool {
    SAFE_SET.contains(standard_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erc777_classified_critical() {
        let record = get_health("777").expect("ERC-777 must carry a record");
        assert_eq!(record.tier, RiskTier::Critical);
        assert_eq!(record.replacement, Some("20"));
    }

    #[test]
    fn test_safe_and_classified_disjoint() {
        for record in HEALTH_RECORDS {
            assert!(
                !is_known_safe(record.standard_id),
                "{} is both classified and known-safe",
                record.standard_id
            );
        }
    }

    #[test]
    fn test_unclassified_standard() {
        assert!(get_health("20").is_none());
        assert!(is_known_safe("20"));
    }
}
