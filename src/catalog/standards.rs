//! Standards Catalog - Single Source of Truth
//!
//! The hand-curated catalog of token/contract standards. Every other
//! static table (health, compatibility, gas, L2) keys into this one;
//! referential integrity is enforced at startup by `catalog::validate`.
//!
//! Records are compile-time data and never mutated.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::types::StandardRecord;

// ============================================
// CATEGORY NAMES
// ============================================

pub const CATEGORY_FUNGIBLE: &str = "Fungible Tokens";
pub const CATEGORY_NFT: &str = "Non-Fungible Tokens";
pub const CATEGORY_MULTI: &str = "Multi-Token";
pub const CATEGORY_DEFI: &str = "DeFi & Vaults";
pub const CATEGORY_INTERFACES: &str = "Interfaces & Signatures";
pub const CATEGORY_PROXY: &str = "Proxies & Upgradeability";
pub const CATEGORY_ACCOUNTS: &str = "Accounts & Identity";

// ============================================
// THE CATALOG
// ============================================

/// All standards known to the service, ordered by identifier.
pub static CATALOG: &[StandardRecord] = &[
    StandardRecord {
        id: "20",
        name: "ERC-20",
        title: "Token Standard",
        category: CATEGORY_FUNGIBLE,
        summary: "The fungible token interface: balances, transfers, and \
                  allowance-based delegated spending. The default choice for \
                  any interchangeable asset.",
        features: &["fungible", "allowances", "transfers"],
        use_cases: &[
            "utility token",
            "governance token",
            "stablecoin",
            "wrapped asset",
        ],
        related: &["2612", "777", "4626"],
    },
    StandardRecord {
        id: "165",
        name: "ERC-165",
        title: "Standard Interface Detection",
        category: CATEGORY_INTERFACES,
        summary: "Lets a contract publish which interfaces it implements via \
                  supportsInterface, so callers can probe capabilities before \
                  interacting.",
        features: &["introspection"],
        use_cases: &["interface probing", "marketplace integration"],
        related: &["721", "1155", "2981"],
    },
    StandardRecord {
        id: "173",
        name: "ERC-173",
        title: "Contract Ownership Standard",
        category: CATEGORY_INTERFACES,
        summary: "A minimal owner() / transferOwnership() interface so tooling \
                  can discover and transfer contract ownership uniformly.",
        features: &["ownership", "access-control"],
        use_cases: &["admin handover", "explorer tooling"],
        related: &["2535"],
    },
    StandardRecord {
        id: "223",
        name: "ERC-223",
        title: "Token with Transfer Handler",
        category: CATEGORY_FUNGIBLE,
        summary: "An ERC-20 alternative that invokes a tokenReceived handler on \
                  the recipient, intended to stop tokens being stranded in \
                  contracts that cannot move them.",
        features: &["fungible", "receiver-hook"],
        use_cases: &["loss-resistant transfers"],
        related: &["20", "777"],
    },
    StandardRecord {
        id: "712",
        name: "EIP-712",
        title: "Typed Structured Data Hashing and Signing",
        category: CATEGORY_INTERFACES,
        summary: "Deterministic hashing and signing of typed structured data, \
                  with domain separation. The foundation for human-readable \
                  wallet signing prompts.",
        features: &["signatures", "typed-data", "domain-separator"],
        use_cases: &["off-chain orders", "meta-transactions", "permits"],
        related: &["2612", "1271", "4337"],
    },
    StandardRecord {
        id: "721",
        name: "ERC-721",
        title: "Non-Fungible Token Standard",
        category: CATEGORY_NFT,
        summary: "Unique tokens with per-token ownership, approvals, and safe \
                  transfer callbacks. The canonical NFT interface.",
        features: &["non-fungible", "enumerable", "safe-transfer"],
        use_cases: &["pfp collection", "game items", "membership passes", "deeds"],
        related: &["165", "2981", "4907", "6551"],
    },
    StandardRecord {
        id: "777",
        name: "ERC-777",
        title: "Token Standard with Hooks",
        category: CATEGORY_FUNGIBLE,
        summary: "A fungible token with send/receive hooks registered through \
                  the ERC-1820 registry and operator-based delegated transfers. \
                  Backwards compatible with ERC-20 on the read side.",
        features: &["fungible", "hooks", "operators"],
        use_cases: &["tokens with transfer notifications"],
        related: &["20", "223"],
    },
    StandardRecord {
        id: "827",
        name: "ERC-827",
        title: "Token with Call Extensions",
        category: CATEGORY_FUNGIBLE,
        summary: "An ERC-20 extension adding approveAndCall / transferAndCall \
                  so approvals and transfers can trigger arbitrary calls in one \
                  transaction.",
        features: &["fungible", "call-forwarding"],
        use_cases: &["single-transaction approve-and-use flows"],
        related: &["20"],
    },
    StandardRecord {
        id: "1155",
        name: "ERC-1155",
        title: "Multi Token Standard",
        category: CATEGORY_MULTI,
        summary: "Fungible and non-fungible balances under one contract with \
                  batched transfers and per-id supply, built for game economies \
                  and editioned media.",
        features: &["multi-token", "batching", "safe-transfer"],
        use_cases: &["game inventory", "edition drops", "semi-fungible assets"],
        related: &["165", "721", "2981"],
    },
    StandardRecord {
        id: "1271",
        name: "ERC-1271",
        title: "Standard Signature Validation for Contracts",
        category: CATEGORY_INTERFACES,
        summary: "isValidSignature lets smart-contract accounts approve \
                  signatures, so protocols can accept contract wallets wherever \
                  EOA signatures are expected.",
        features: &["signatures", "smart-accounts"],
        use_cases: &["contract-wallet login", "order signing from multisigs"],
        related: &["712", "4337"],
    },
    StandardRecord {
        id: "1822",
        name: "ERC-1822",
        title: "Universal Upgradeable Proxy Standard (UUPS)",
        category: CATEGORY_PROXY,
        summary: "Puts the upgrade function on the implementation rather than \
                  the proxy, with proxiableUUID guarding against upgrading to \
                  an incompatible target.",
        features: &["proxy", "upgradeable"],
        use_cases: &["upgradeable protocol contracts"],
        related: &["1967"],
    },
    StandardRecord {
        id: "1967",
        name: "ERC-1967",
        title: "Proxy Storage Slots",
        category: CATEGORY_PROXY,
        summary: "Reserves well-known storage slots for implementation, admin, \
                  and beacon addresses so explorers and tooling can introspect \
                  any conforming proxy.",
        features: &["proxy", "storage-slots"],
        use_cases: &["transparent proxies", "explorer verification"],
        related: &["1822"],
    },
    StandardRecord {
        id: "2535",
        name: "ERC-2535",
        title: "Diamond Standard",
        category: CATEGORY_PROXY,
        summary: "A multi-facet proxy that routes function selectors to many \
                  implementation contracts, sidestepping the contract size \
                  limit for very large systems.",
        features: &["proxy", "facets", "modular"],
        use_cases: &["large modular protocols"],
        related: &["173", "1967"],
    },
    StandardRecord {
        id: "2612",
        name: "ERC-2612",
        title: "Permit: Signature-Based ERC-20 Approvals",
        category: CATEGORY_FUNGIBLE,
        summary: "Adds permit() to ERC-20 so allowances can be granted with an \
                  EIP-712 signature instead of an on-chain approve transaction, \
                  enabling gasless onboarding.",
        features: &["fungible", "permit", "gasless"],
        use_cases: &["gasless token approvals", "one-click swaps"],
        related: &["20", "712"],
    },
    StandardRecord {
        id: "2981",
        name: "ERC-2981",
        title: "NFT Royalty Standard",
        category: CATEGORY_NFT,
        summary: "royaltyInfo signals a royalty receiver and amount per sale so \
                  marketplaces can honor creator fees uniformly. Signalling \
                  only; enforcement is up to the marketplace.",
        features: &["royalties", "marketplace"],
        use_cases: &["creator royalties"],
        related: &["721", "1155"],
    },
    StandardRecord {
        id: "3156",
        name: "ERC-3156",
        title: "Flash Loans",
        category: CATEGORY_DEFI,
        summary: "A lender/borrower callback interface for uncollateralized \
                  loans repaid within one transaction.",
        features: &["flash-loans", "callbacks"],
        use_cases: &["arbitrage", "collateral swaps", "liquidations"],
        related: &["20"],
    },
    StandardRecord {
        id: "4337",
        name: "ERC-4337",
        title: "Account Abstraction via EntryPoint",
        category: CATEGORY_ACCOUNTS,
        summary: "Smart-contract accounts with UserOperations relayed through \
                  bundlers and a singleton EntryPoint, with no consensus-layer \
                  changes. Enables sponsored gas and session keys.",
        features: &["smart-accounts", "bundlers", "paymasters"],
        use_cases: &["wallet onboarding", "sponsored transactions", "session keys"],
        related: &["712", "1271"],
    },
    StandardRecord {
        id: "4626",
        name: "ERC-4626",
        title: "Tokenized Vault Standard",
        category: CATEGORY_DEFI,
        summary: "A standard interface for yield-bearing vaults whose shares \
                  are themselves ERC-20 tokens: deposit/withdraw plus preview \
                  and conversion math.",
        features: &["vault", "yield", "fungible-shares"],
        use_cases: &["yield aggregator", "staking vault", "lending market shares"],
        related: &["20"],
    },
    StandardRecord {
        id: "4907",
        name: "ERC-4907",
        title: "Rental NFT Extension",
        category: CATEGORY_NFT,
        summary: "Adds an expiring 'user' role to ERC-721 so a token can be \
                  rented out without transferring ownership.",
        features: &["non-fungible", "rental", "roles"],
        use_cases: &["game asset rental", "land leasing"],
        related: &["721"],
    },
    StandardRecord {
        id: "5192",
        name: "ERC-5192",
        title: "Minimal Soulbound NFTs",
        category: CATEGORY_NFT,
        summary: "A locked() flag plus events marking an ERC-721 token as \
                  non-transferable, for credentials and attestations bound to \
                  one account.",
        features: &["non-fungible", "soulbound"],
        use_cases: &["credentials", "attendance badges", "reputation"],
        related: &["721"],
    },
    StandardRecord {
        id: "6551",
        name: "ERC-6551",
        title: "Token Bound Accounts",
        category: CATEGORY_ACCOUNTS,
        summary: "Gives every ERC-721 token its own smart-contract account via \
                  a deterministic registry, so NFTs can own assets and act \
                  on-chain.",
        features: &["smart-accounts", "non-fungible", "registry"],
        use_cases: &["nft inventories", "character accounts"],
        related: &["721", "4337"],
    },
];

lazy_static! {
    /// id -> record index for O(1) lookup
    static ref STANDARD_INDEX: HashMap<&'static str, &'static StandardRecord> =
        CATALOG.iter().map(|s| (s.id, s)).collect();
}

// ============================================
// LOOKUPS
// ============================================

/// All standards, catalog order.
pub fn all_standards() -> &'static [StandardRecord] {
    CATALOG
}

/// Look up one standard by bare numeric identifier.
pub fn get_standard(id: &str) -> Option<&'static StandardRecord> {
    STANDARD_INDEX.get(id).copied()
}

/// True when the identifier exists in the catalog.
pub fn is_known_standard(id: &str) -> bool {
    STANDARD_INDEX.contains_key(id)
}

/// Distinct category names, catalog order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for standard in CATALOG {
        if !seen.contains(&standard.category) {
            seen.push(standard.category);
        }
    }
    seen
}

/// Standards in a category, case-insensitive match.
pub fn standards_by_category(category: &str) -> Vec<&'static StandardRecord> {
    CATALOG
        .iter()
        .filter(|s| s.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Free-text search over name, title, summary, features, and use cases.
/// The non-AI browse path: cheap substring matching, no ranking model.
pub fn search_standards(query: &str) -> Vec<&'static StandardRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.title.to_lowercase().contains(&needle)
                || s.summary.to_lowercase().contains(&needle)
                || s.features.iter().any(|f| f.to_lowercase().contains(&needle))
                || s.use_cases.iter().any(|u| u.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let erc20 = get_standard("20").expect("ERC-20 should exist");
        assert_eq!(erc20.name, "ERC-20");
        assert!(get_standard("99999").is_none());
    }

    #[test]
    fn test_catalog_ids_unique() {
        assert_eq!(STANDARD_INDEX.len(), CATALOG.len(), "duplicate catalog id");
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let lower = standards_by_category("fungible tokens");
        let exact = standards_by_category(CATEGORY_FUNGIBLE);
        assert!(!exact.is_empty());
        assert_eq!(lower.len(), exact.len());
    }

    #[test]
    fn test_search_matches_use_cases() {
        let hits = search_standards("royalties");
        assert!(hits.iter().any(|s| s.id == "2981"));
        assert!(search_standards("   ").is_empty());
    }
}
