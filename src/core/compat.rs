//! Compatibility Lookup
//!
//! Resolves the curated relationship between two distinct standards.
//! Lookup is symmetric: the pair is tried as given, then reversed. An
//! unknown pair degrades to the default "no data available" verdict;
//! absence of data is an expected, common case, never an error.

use crate::catalog::compat::get_rule;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{CompatLevel, CompatVerdict};

/// Note attached to the default verdict for uncurated pairs.
const NO_DATA_NOTE: &str =
    "No curated compatibility data exists for this pair. Absence of data is \
     not a verdict; review both standards' integration notes before combining \
     them.";

/// Compare two distinct standard identifiers.
///
/// Self-pairs are rejected with `InvalidArgument`: comparing a standard
/// with itself is a caller error, not a lookup.
pub fn compare(first: &str, second: &str) -> AppResult<CompatVerdict> {
    let first = first.trim();
    let second = second.trim();

    if first.is_empty() || second.is_empty() {
        return Err(AppError::invalid_argument(
            "Both standard identifiers are required",
        ));
    }
    if first == second {
        return Err(AppError::invalid_argument(format!(
            "Cannot compare standard {} with itself",
            first
        )));
    }

    let rule = get_rule(first, second).or_else(|| get_rule(second, first));

    Ok(match rule {
        Some(rule) => CompatVerdict {
            first: first.to_string(),
            second: second.to_string(),
            level: rule.level,
            rationale: rule.rationale.to_string(),
            curated: true,
        },
        None => CompatVerdict {
            first: first.to_string(),
            second: second.to_string(),
            level: CompatLevel::NotAvailable,
            rationale: NO_DATA_NOTE.to_string(),
            curated: false,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    #[test]
    fn test_curated_pair() {
        let verdict = compare("20", "721").unwrap();
        assert_eq!(verdict.level, CompatLevel::Incompatible);
        assert!(verdict.curated);
    }

    #[test]
    fn test_symmetry() {
        let forward = compare("20", "721").unwrap();
        let reverse = compare("721", "20").unwrap();
        assert_eq!(forward.level, reverse.level);
        assert_eq!(forward.rationale, reverse.rationale);
    }

    #[test]
    fn test_unregistered_pair_defaults() {
        let verdict = compare("2612", "1155").unwrap();
        assert_eq!(verdict.level, CompatLevel::NotAvailable);
        assert!(!verdict.curated);
    }

    #[test]
    fn test_unknown_identifiers_do_not_error() {
        let verdict = compare("999", "888").unwrap();
        assert_eq!(verdict.level, CompatLevel::NotAvailable);
    }

    #[test]
    fn test_self_pair_rejected() {
        let err = compare("20", "20").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let err = compare("", "721").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let verdict = compare(" 20 ", "721").unwrap();
        assert_eq!(verdict.first, "20");
        assert!(verdict.curated);
    }
}
