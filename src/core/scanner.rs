//! Pattern Scanner - Risky Standard Detection in Pasted Source
//!
//! Detects references to known standards inside a blob of source text and
//! classifies each by the curated risk tier. Matching is literal,
//! case-insensitive regex over raw text: no tokenization, no comment
//! stripping, no string-literal exclusion. False positives inside comments
//! are an accepted limitation of the contract, not a bug.
//!
//! Pure function of the input and the static tables: identical input
//! always yields identical output.

use regex::Regex;

use lazy_static::lazy_static;

use crate::catalog::health::{get_health, is_known_safe};
use crate::catalog::standards::CATALOG;
use crate::models::types::{ScanHit, MAX_HIT_LINES};

lazy_static! {
    /// One compiled pattern per catalog standard, covering the common
    /// name variants: for 777 that is ERC777, IERC777, erc-777, eip_777,
    /// "EIP 777", and so on. Word boundaries keep 721 from firing on 7212.
    static ref PATTERNS: Vec<(&'static str, Regex)> = CATALOG
        .iter()
        .map(|s| {
            let pattern = format!(r"(?i)\b(?:i?erc|eip)[-_ ]?{}\b", s.id);
            // Catalog ids are digit strings, so the pattern is always valid.
            (s.id, Regex::new(&pattern).expect("invalid scanner pattern"))
        })
        .collect();
}

/// Per-standard accumulator while walking the input
struct HitAccumulator {
    standard_id: &'static str,
    match_count: usize,
    lines: Vec<usize>,
    /// (line, column) of the first match, for encounter ordering
    first_seen: (usize, usize),
}

/// Scan a blob of source text for references to known standards.
///
/// Returns one hit per distinct standard that matched at least once,
/// ordered: classified hits first (critical, high, medium, low), then
/// unclassified hits in encounter order. Empty or whitespace-only input
/// yields an empty list; "no patterns detected" is a valid result, not
/// an error.
pub fn scan(source: &str) -> Vec<ScanHit> {
    if source.trim().is_empty() {
        return Vec::new();
    }

    let mut accumulators: Vec<HitAccumulator> = Vec::new();

    for (line_idx, line) in source.lines().enumerate() {
        let line_no = line_idx + 1;
        for (standard_id, regex) in PATTERNS.iter() {
            let standard_id: &'static str = standard_id;
            let mut line_matches = 0usize;
            let mut first_col = 0usize;
            for m in regex.find_iter(line) {
                if line_matches == 0 {
                    first_col = m.start();
                }
                line_matches += 1;
            }
            if line_matches == 0 {
                continue;
            }

            match accumulators.iter_mut().find(|a| a.standard_id == standard_id) {
                Some(acc) => {
                    acc.match_count += line_matches;
                    if acc.lines.len() < MAX_HIT_LINES {
                        acc.lines.push(line_no);
                    }
                }
                None => accumulators.push(HitAccumulator {
                    standard_id,
                    match_count: line_matches,
                    lines: vec![line_no],
                    first_seen: (line_no, first_col),
                }),
            }
        }
    }

    // Base order: encounter order across the whole input.
    accumulators.sort_by_key(|a| a.first_seen);

    let mut hits: Vec<ScanHit> = accumulators.into_iter().map(build_hit).collect();

    // Classified hits sort before unclassified; among classified, by tier
    // severity. The sort is stable, so ties and the unclassified tail keep
    // encounter order.
    hits.sort_by_key(|h| match h.tier {
        Some(tier) => (0u8, tier.rank()),
        None => (1u8, 0u8),
    });

    hits
}

fn build_hit(acc: HitAccumulator) -> ScanHit {
    let standard = crate::catalog::standards::get_standard(acc.standard_id)
        .expect("scanner pattern for unknown standard");
    let health = get_health(acc.standard_id);

    ScanHit {
        standard_id: acc.standard_id.to_string(),
        standard_name: standard.name.to_string(),
        match_count: acc.match_count,
        lines: acc.lines,
        tier: health.map(|h| h.tier),
        rationale: health.map(|h| h.rationale.to_string()),
        replacement: health.and_then(|h| h.replacement.map(|r| r.to_string())),
        known_safe: health.is_none() && is_known_safe(acc.standard_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::RiskTier;

    #[test]
    fn test_erc777_import_line() {
        let hits = scan(r#"import "...ERC777/ERC777.sol";"#);
        assert_eq!(hits.len(), 1, "exactly one distinct standard");
        let hit = &hits[0];
        assert_eq!(hit.standard_id, "777");
        assert_eq!(hit.match_count, 2, "both occurrences on the line count");
        assert_eq!(hit.lines, vec![1]);
        assert_eq!(hit.tier, Some(RiskTier::Critical));
        assert_eq!(hit.replacement.as_deref(), Some("20"));
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").is_empty());
        assert!(scan("   \n\t  \n").is_empty());
    }

    #[test]
    fn test_no_recognized_patterns() {
        let hits = scan("contract Plain { uint256 x; }");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_case_insensitive_variants() {
        for text in ["ERC777", "ierc777", "erc-777", "EIP-777", "eip_777", "Eip 777"] {
            let hits = scan(text);
            assert_eq!(hits.len(), 1, "variant {:?} should match", text);
            assert_eq!(hits[0].standard_id, "777");
        }
    }

    #[test]
    fn test_word_boundary_no_prefix_match() {
        // 721 must not fire on 7212, and 20 must not fire on 2022.
        assert!(scan("ERC7212").is_empty());
        assert!(scan("eip2022").iter().all(|h| h.standard_id != "20"));
    }

    #[test]
    fn test_classified_sort_before_unclassified() {
        // 20 is known-safe (unclassified), 4626 is Low, 777 is Critical.
        let source = "uses ERC20\nand ERC4626\nand ERC777\n";
        let hits = scan(source);
        let ids: Vec<&str> = hits.iter().map(|h| h.standard_id.as_str()).collect();
        assert_eq!(ids, vec!["777", "4626", "20"]);
        assert!(hits[2].known_safe);
        assert!(hits[2].tier.is_none());
    }

    #[test]
    fn test_severity_ordering_within_classified() {
        // Low (4626) encountered before High (1822) before Critical (777):
        // severity must override encounter order among classified hits.
        let hits = scan("ERC4626 then ERC1822 then ERC777");
        let tiers: Vec<RiskTier> = hits.iter().filter_map(|h| h.tier).collect();
        assert_eq!(
            tiers,
            vec![RiskTier::Critical, RiskTier::High, RiskTier::Low]
        );
    }

    #[test]
    fn test_unclassified_retain_encounter_order() {
        let hits = scan("IERC721 here\nIERC165 there\nERC2981 royalty");
        let ids: Vec<&str> = hits.iter().map(|h| h.standard_id.as_str()).collect();
        assert_eq!(ids, vec!["721", "165", "2981"]);
    }

    #[test]
    fn test_line_numbers_capped_at_five() {
        let source = "ERC20\n".repeat(9);
        let hits = scan(&source);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].match_count, 9);
        assert_eq!(hits[0].lines, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_deterministic() {
        let source = "import \"ERC777.sol\";\ncontract C is IERC20, ERC4626 {}";
        let first = scan(source);
        let second = scan(source);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.standard_id, b.standard_id);
            assert_eq!(a.match_count, b.match_count);
            assert_eq!(a.lines, b.lines);
        }
    }

    #[test]
    fn test_comment_false_positive_is_accepted() {
        // Literal matching over raw text: a mention inside a comment still
        // produces a hit. Documented contract, not a defect.
        let hits = scan("// do NOT use ERC777 here");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].standard_id, "777");
    }
}
