//! Catalog Referential Integrity
//!
//! Every health record, known-safe entry, compatibility rule side,
//! replacement pointer, related-standard id, gas profile, and L2 note
//! must reference a standard that exists in the catalog. The tables are
//! hand-curated, so silent drift is possible; the process fails fast at
//! startup instead of serving dangling references.

use crate::catalog::compat::COMPAT_RULES;
use crate::catalog::gas::{GAS_PROFILES, L2_SUPPORT};
use crate::catalog::health::{HEALTH_RECORDS, KNOWN_SAFE};
use crate::catalog::standards::{is_known_standard, CATALOG};
use crate::models::errors::{AppError, AppResult};

/// Run the full integrity pass. Returns the first batch of dangling
/// references as a single fatal error.
pub fn validate_catalog() -> AppResult<()> {
    let mut dangling: Vec<String> = Vec::new();

    for record in HEALTH_RECORDS {
        if !is_known_standard(record.standard_id) {
            dangling.push(format!("health record -> {}", record.standard_id));
        }
        if let Some(replacement) = record.replacement {
            if !is_known_standard(replacement) {
                dangling.push(format!(
                    "health replacement {} -> {}",
                    record.standard_id, replacement
                ));
            }
        }
    }

    for id in KNOWN_SAFE {
        if !is_known_standard(id) {
            dangling.push(format!("known-safe -> {}", id));
        }
    }

    for rule in COMPAT_RULES {
        for side in [rule.first, rule.second] {
            if !is_known_standard(side) {
                dangling.push(format!(
                    "compat rule ({}, {}) -> {}",
                    rule.first, rule.second, side
                ));
            }
        }
        if rule.first == rule.second {
            dangling.push(format!("compat rule self-pair ({0}, {0})", rule.first));
        }
    }

    for profile in GAS_PROFILES {
        if !is_known_standard(profile.standard_id) {
            dangling.push(format!("gas profile -> {}", profile.standard_id));
        }
    }

    for support in L2_SUPPORT {
        if !is_known_standard(support.standard_id) {
            dangling.push(format!("l2 support -> {}", support.standard_id));
        }
    }

    for standard in CATALOG {
        for related in standard.related {
            if !is_known_standard(related) {
                dangling.push(format!("related {} -> {}", standard.id, related));
            }
        }
    }

    if dangling.is_empty() {
        Ok(())
    } else {
        Err(AppError::catalog_integrity(format!(
            "{} dangling reference(s): {}",
            dangling.len(),
            dangling.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tables_are_consistent() {
        validate_catalog().expect("shipped static tables must validate");
    }
}
