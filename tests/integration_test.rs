//! Integration tests for ERC Sentry

use erc_sentry::{
    all_standards, compare, get_health, get_standard, is_known_safe, scan, validate_catalog,
    CompatLevel, ErrorCode, RiskTier,
};

#[test]
fn test_catalog_referential_integrity() {
    validate_catalog().expect("shipped static tables must be consistent");
}

#[test]
fn test_every_standard_detected_case_insensitively() {
    // Case-insensitivity invariant: the canonical name in any case must
    // produce a hit for every catalog entry.
    for standard in all_standards() {
        for text in [
            standard.name.to_string(),                      // "ERC-20"
            standard.name.to_uppercase().replace('-', ""),  // "ERC20"
            standard.name.to_lowercase(),                   // "erc-20"
        ] {
            let hits = scan(&text);
            assert!(
                hits.iter().any(|h| h.standard_id == standard.id),
                "{:?} should produce a hit for {}",
                text,
                standard.id
            );
        }
    }
}

#[test]
fn test_compatibility_symmetry_for_all_pairs() {
    // Symmetry invariant over every distinct catalog pair, curated or not.
    let ids: Vec<&str> = all_standards().iter().map(|s| s.id).collect();
    for a in &ids {
        for b in &ids {
            if a == b {
                continue;
            }
            let forward = compare(a, b).unwrap();
            let reverse = compare(b, a).unwrap();
            assert_eq!(forward.level, reverse.level, "({}, {}) asymmetric", a, b);
            assert_eq!(
                forward.rationale, reverse.rationale,
                "({}, {}) rationale differs",
                a, b
            );
        }
    }
}

#[test]
fn test_unrecognized_text_yields_empty_list() {
    let hits = scan("pragma solidity ^0.8.0;\ncontract Nothing {}\n");
    assert!(hits.is_empty(), "no recognized patterns means empty, not error");
}

#[test]
fn test_classified_hits_sort_before_unclassified() {
    // 20 and 721 are known-safe; 4626 (low), 1822 (high), 777 (critical)
    // are classified. Severity must order the classified prefix.
    let source = "\
        import \"IERC20.sol\";\n\
        import \"ERC4626.sol\";\n\
        import \"ERC721.sol\";\n\
        import \"ERC1822.sol\";\n\
        import \"ERC777.sol\";\n";
    let hits = scan(source);

    let first_unclassified = hits
        .iter()
        .position(|h| h.tier.is_none())
        .expect("safe hits present");
    assert!(
        hits[..first_unclassified].iter().all(|h| h.tier.is_some()),
        "classified hits must form a strict prefix"
    );

    let tiers: Vec<RiskTier> = hits.iter().filter_map(|h| h.tier).collect();
    let mut sorted = tiers.clone();
    sorted.sort_by_key(|t| t.rank());
    assert_eq!(tiers, sorted, "classified hits ordered critical..low");

    // Unclassified tail keeps encounter order: 20 before 721.
    let tail: Vec<&str> = hits[first_unclassified..]
        .iter()
        .map(|h| h.standard_id.as_str())
        .collect();
    assert_eq!(tail, vec!["20", "721"]);
}

#[test]
fn test_scanner_determinism() {
    let source = "contract Vault is ERC4626, IERC20 { /* erc-777 note */ }";
    let first = scan(source);
    let second = scan(source);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.standard_id, b.standard_id);
        assert_eq!(a.match_count, b.match_count);
        assert_eq!(a.lines, b.lines);
        assert_eq!(a.tier, b.tier);
    }
}

#[test]
fn test_scenario_erc777_import() {
    // Concrete scenario 1 from the contract.
    let hits = scan(r#"import "...ERC777/ERC777.sol";"#);
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert_eq!(hit.standard_id, "777");
    let record = get_health("777").unwrap();
    assert_eq!(hit.tier, Some(record.tier));
    assert_eq!(hit.replacement.as_deref(), Some("20"));
}

#[test]
fn test_scenario_empty_scan() {
    assert!(scan("").is_empty());
}

#[test]
fn test_scenario_erc20_erc721_incompatible_both_ways() {
    let forward = compare("20", "721").unwrap();
    assert_eq!(forward.level, CompatLevel::Incompatible);
    assert!(forward.curated);

    let reverse = compare("721", "20").unwrap();
    assert_eq!(reverse.level, forward.level);
    assert_eq!(reverse.rationale, forward.rationale);
}

#[test]
fn test_scenario_unregistered_pair_defaults() {
    let verdict = compare("2612", "1155").unwrap();
    assert_eq!(verdict.level, CompatLevel::NotAvailable);
    assert!(!verdict.curated);
    assert!(!verdict.rationale.is_empty(), "generic note expected");
}

#[test]
fn test_self_pair_is_invalid_argument() {
    let err = compare("1155", "1155").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
    assert_eq!(err.code.http_status(), 400);
}

#[test]
fn test_known_safe_hits_have_no_risk_annotation() {
    let hits = scan("uses IERC165 probing");
    assert_eq!(hits.len(), 1);
    let hit = &hits[0];
    assert!(hit.known_safe);
    assert!(hit.tier.is_none());
    assert!(hit.rationale.is_none());
    assert!(hit.replacement.is_none());
}

#[test]
fn test_health_replacements_resolve_in_catalog() {
    for standard in all_standards() {
        if let Some(record) = get_health(standard.id) {
            if let Some(replacement) = record.replacement {
                assert!(
                    get_standard(replacement).is_some(),
                    "replacement {} for {} must exist",
                    replacement,
                    standard.id
                );
            }
            assert!(
                !is_known_safe(standard.id),
                "{} cannot be classified and known-safe at once",
                standard.id
            );
        }
    }
}

#[test]
fn test_error_status_mapping_distinguishes_upstream_kinds() {
    // Concrete scenario 6: a 429 from upstream must surface differently
    // from a generic 500 failure.
    assert_eq!(ErrorCode::RateLimited.http_status(), 429);
    assert_eq!(ErrorCode::PaymentRequired.http_status(), 402);
    assert_eq!(ErrorCode::UpstreamError.http_status(), 500);
    assert_ne!(
        erc_sentry::AppError::rate_limited().message,
        erc_sentry::AppError::upstream("AI gateway request failed").message
    );
}
