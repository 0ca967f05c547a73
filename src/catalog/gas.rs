//! Gas Profiles & L2 Support Notes
//!
//! Hand-curated cost estimates and rollup readiness notes per standard.
//! Numbers are ballpark mainnet figures for unoptimized reference
//! implementations; they annotate catalog entries, they are not quotes.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::types::{GasProfile, L2Support};

/// Deployment and hot-path operation estimates.
pub static GAS_PROFILES: &[GasProfile] = &[
    GasProfile {
        standard_id: "20",
        deploy_gas: 1_200_000,
        operations: &[("transfer", 51_000), ("approve", 46_000), ("transferFrom", 60_000)],
        note: "The cheapest token primitive; costs dominated by two storage \
               writes per transfer.",
    },
    GasProfile {
        standard_id: "721",
        deploy_gas: 2_400_000,
        operations: &[("mint", 140_000), ("safeTransferFrom", 85_000), ("approve", 48_000)],
        note: "safeTransferFrom adds a receiver callback on contract \
               recipients; batch minting is not part of the base standard.",
    },
    GasProfile {
        standard_id: "777",
        deploy_gas: 2_800_000,
        operations: &[("send", 105_000), ("authorizeOperator", 46_000)],
        note: "Every send consults the ERC-1820 registry and may invoke two \
               hooks, roughly doubling ERC-20 transfer cost.",
    },
    GasProfile {
        standard_id: "1155",
        deploy_gas: 2_900_000,
        operations: &[
            ("safeTransferFrom", 52_000),
            ("safeBatchTransferFrom", 110_000),
            ("mintBatch", 160_000),
        ],
        note: "Batching amortizes per-call overhead; a 10-id batch transfer \
               costs far less than ten ERC-721 transfers.",
    },
    GasProfile {
        standard_id: "2612",
        deploy_gas: 1_500_000,
        operations: &[("permit", 80_000)],
        note: "permit folds the approve transaction into the spend \
               transaction, saving the user a separate 46k approve.",
    },
    GasProfile {
        standard_id: "4626",
        deploy_gas: 2_200_000,
        operations: &[("deposit", 160_000), ("withdraw", 170_000)],
        note: "Deposit/withdraw cost rides on the underlying ERC-20 plus \
               share mint/burn; preview calls are view-only.",
    },
    GasProfile {
        standard_id: "1967",
        deploy_gas: 500_000,
        operations: &[("delegated call overhead", 2_700)],
        note: "A minimal proxy deploys cheaply; every call pays the \
               delegatecall indirection on top of implementation cost.",
    },
    GasProfile {
        standard_id: "4337",
        deploy_gas: 3_500_000,
        operations: &[("UserOperation overhead", 42_000)],
        note: "Per-operation bundler overhead on top of the inner call; \
               paymaster validation adds more.",
    },
];

/// Rollup readiness notes. Absence of an entry means nothing special
/// to report, not absence of support.
pub static L2_SUPPORT: &[L2Support] = &[
    L2Support {
        standard_id: "20",
        networks: &[
            ("Arbitrum One", "Native; canonical bridge wraps L1 tokens 1:1."),
            ("Optimism", "Native; OptimismMintableERC20 for bridged assets."),
            ("Base", "Native; same OP Stack bridge contracts as Optimism."),
        ],
    },
    L2Support {
        standard_id: "721",
        networks: &[
            ("Arbitrum One", "Fully supported; mints cost cents, not dollars."),
            ("Optimism", "Fully supported; bridged NFTs via the L2 ERC-721 bridge."),
            ("Base", "Fully supported; the default home for consumer mints."),
        ],
    },
    L2Support {
        standard_id: "777",
        networks: &[
            (
                "Arbitrum One",
                "ERC-1820 registry is not predeployed; hooks silently no-op \
                 unless someone deploys the registry at the canonical address.",
            ),
            (
                "Optimism",
                "Same registry caveat; verify 0x1820a4... exists before \
                 relying on hooks.",
            ),
        ],
    },
    L2Support {
        standard_id: "1155",
        networks: &[
            ("Arbitrum One", "Fully supported."),
            ("Optimism", "Fully supported."),
        ],
    },
    L2Support {
        standard_id: "4337",
        networks: &[
            ("Arbitrum One", "EntryPoint deployed; several public bundlers."),
            ("Optimism", "EntryPoint deployed; bundler coverage varies."),
            ("Base", "First-class support; Coinbase Smart Wallet builds on it."),
        ],
    },
    L2Support {
        standard_id: "6551",
        networks: &[
            (
                "Arbitrum One",
                "Registry must be deployed per chain at the canonical \
                 address; verify before computing account addresses.",
            ),
            ("Base", "Canonical registry deployed."),
        ],
    },
];

lazy_static! {
    static ref GAS_INDEX: HashMap<&'static str, &'static GasProfile> =
        GAS_PROFILES.iter().map(|g| (g.standard_id, g)).collect();
    static ref L2_INDEX: HashMap<&'static str, &'static L2Support> =
        L2_SUPPORT.iter().map(|l| (l.standard_id, l)).collect();
}

/// Gas profile for a standard, if curated.
pub fn get_gas_profile(standard_id: &str) -> Option<&'static GasProfile> {
    GAS_INDEX.get(standard_id).copied()
}

/// L2 notes for a standard, if curated.
pub fn get_l2_support(standard_id: &str) -> Option<&'static L2Support> {
    L2_INDEX.get(standard_id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_lookup() {
        let erc20 = get_gas_profile("20").expect("ERC-20 gas profile");
        assert!(erc20.deploy_gas > 0);
        assert!(get_gas_profile("5192").is_none());
    }

    #[test]
    fn test_l2_registry_caveat_carried() {
        let notes = get_l2_support("777").expect("ERC-777 L2 notes");
        assert!(notes.networks.iter().any(|(_, n)| n.contains("1820")));
    }
}
