//! Compatibility Rules - Curated Pair Classifications
//!
//! Authoritative, hand-curated relationships between pairs of standards.
//! Keys are unordered: a rule registered for (A, B) resolves for (B, A).
//! Pairs with no rule get the default no-data verdict from `core::compat`,
//! never an error.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::types::{CompatLevel, CompatibilityRule};

/// The rule table. Order within a pair does not matter for lookup.
pub static COMPAT_RULES: &[CompatibilityRule] = &[
    CompatibilityRule {
        first: "20",
        second: "721",
        level: CompatLevel::Incompatible,
        rationale: "Fungible and non-fungible semantics conflict in one \
                    contract: balanceOf, transferFrom, and approval models \
                    collide, and ERC-165 answers become ambiguous. Deploy \
                    separate contracts per asset class.",
    },
    CompatibilityRule {
        first: "20",
        second: "2612",
        level: CompatLevel::Required,
        rationale: "ERC-2612 is an extension of ERC-20: permit() grants \
                    ERC-20 allowances, so the base token interface must be \
                    present.",
    },
    CompatibilityRule {
        first: "20",
        second: "4626",
        level: CompatLevel::Required,
        rationale: "ERC-4626 vault shares are themselves ERC-20 tokens; the \
                    vault must implement the full token interface for its \
                    shares.",
    },
    CompatibilityRule {
        first: "20",
        second: "777",
        level: CompatLevel::Caution,
        rationale: "ERC-777 mirrors ERC-20 view functions, but its transfer \
                    hooks break the no-callback assumption of most ERC-20 \
                    integrations and open reentrancy windows.",
    },
    CompatibilityRule {
        first: "20",
        second: "3156",
        level: CompatLevel::Compatible,
        rationale: "ERC-3156 lenders conventionally flash-lend ERC-20 \
                    reserves; the borrower callback contract works against \
                    any conforming token.",
    },
    CompatibilityRule {
        first: "20",
        second: "2981",
        level: CompatLevel::NotAvailable,
        rationale: "Per-sale royalty signalling has no defined meaning for \
                    fungible balances; no marketplace consumes royaltyInfo \
                    on an ERC-20.",
    },
    CompatibilityRule {
        first: "721",
        second: "165",
        level: CompatLevel::Required,
        rationale: "ERC-721 mandates ERC-165 so marketplaces can probe \
                    supportsInterface before calling safe-transfer paths.",
    },
    CompatibilityRule {
        first: "721",
        second: "2981",
        level: CompatLevel::Compatible,
        rationale: "Royalty signalling was designed for NFT sales; \
                    marketplaces query royaltyInfo per token id at settlement.",
    },
    CompatibilityRule {
        first: "721",
        second: "4907",
        level: CompatLevel::Required,
        rationale: "ERC-4907 extends ERC-721 with an expiring user role; it \
                    cannot exist without the underlying ownership standard.",
    },
    CompatibilityRule {
        first: "721",
        second: "6551",
        level: CompatLevel::Required,
        rationale: "Token-bound accounts are derived from an existing ERC-721 \
                    token; the registry computes the account address from the \
                    collection and token id.",
    },
    CompatibilityRule {
        first: "721",
        second: "1155",
        level: CompatLevel::Caution,
        rationale: "Both cover NFTs with different transfer and approval \
                    models; shipping both in one collection doubles audit \
                    surface and confuses indexers. Pick one per collection.",
    },
    CompatibilityRule {
        first: "1155",
        second: "165",
        level: CompatLevel::Required,
        rationale: "ERC-1155 mandates ERC-165 interface detection for its \
                    receiver checks.",
    },
    CompatibilityRule {
        first: "1155",
        second: "2981",
        level: CompatLevel::Compatible,
        rationale: "Edition drops commonly pair ERC-1155 supply with per-id \
                    royalty signalling.",
    },
    CompatibilityRule {
        first: "712",
        second: "2612",
        level: CompatLevel::Required,
        rationale: "permit() signatures are EIP-712 typed data; the domain \
                    separator and struct hashing come straight from EIP-712.",
    },
    CompatibilityRule {
        first: "712",
        second: "1271",
        level: CompatLevel::Compatible,
        rationale: "Contract wallets validate EIP-712 digests through \
                    isValidSignature, letting smart accounts participate in \
                    typed-data flows.",
    },
    CompatibilityRule {
        first: "1271",
        second: "4337",
        level: CompatLevel::Compatible,
        rationale: "ERC-4337 smart accounts conventionally expose ERC-1271 so \
                    dapps can verify their signatures off-chain.",
    },
    CompatibilityRule {
        first: "1822",
        second: "1967",
        level: CompatLevel::Compatible,
        rationale: "Modern UUPS deployments layer ERC-1822 upgrade logic over \
                    the ERC-1967 storage slots so explorers can still resolve \
                    the implementation address.",
    },
    CompatibilityRule {
        first: "4907",
        second: "5192",
        level: CompatLevel::Incompatible,
        rationale: "A soulbound token is locked to its owner; granting an \
                    expiring rental user role contradicts the non-transferable \
                    commitment the lock signals.",
    },
];

lazy_static! {
    /// (first, second) -> rule, registered in declared order only.
    /// Reverse-order resolution happens in `core::compat`.
    static ref RULE_INDEX: HashMap<(&'static str, &'static str), &'static CompatibilityRule> =
        COMPAT_RULES.iter().map(|r| ((r.first, r.second), r)).collect();
}

/// Exact-order rule lookup. Callers wanting symmetric resolution should
/// go through `core::compat::compare`.
pub fn get_rule(first: &str, second: &str) -> Option<&'static CompatibilityRule> {
    RULE_INDEX.get(&(first, second)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order_resolves() {
        let rule = get_rule("20", "721").expect("rule must exist");
        assert_eq!(rule.level, CompatLevel::Incompatible);
    }

    #[test]
    fn test_reverse_order_not_registered_twice() {
        // Symmetry is the lookup layer's job; the table stores one direction.
        assert!(get_rule("721", "20").is_none());
    }

    #[test]
    fn test_no_duplicate_pairs() {
        assert_eq!(RULE_INDEX.len(), COMPAT_RULES.len(), "duplicate rule pair");
    }
}
