//! Recommendation Engine
//!
//! Validates the free-text project description, builds the catalog-derived
//! system prompt, runs the one gateway round-trip, and filters the
//! returned identifiers against the static catalog before the result
//! reaches the caller.

use tracing::warn;

use crate::catalog::standards::{all_standards, is_known_standard};
use crate::models::errors::{AppError, AppResult};
use crate::models::types::AiRecommendation;
use crate::providers::gateway::GatewayClient;

/// Build the system prompt: the full catalog plus the response contract.
/// The model never sees data outside the static tables.
pub fn build_system_prompt() -> String {
    let mut prompt = String::from(
        "You are an expert advisor on Ethereum token and contract standards. \
         A user will describe a project; recommend which standards from the \
         catalog below fit it.\n\nCatalog:\n",
    );
    for standard in all_standards() {
        prompt.push_str(&format!(
            "- {} (id \"{}\"): {} — {}\n",
            standard.name, standard.id, standard.title, standard.summary
        ));
    }
    prompt.push_str(
        "\nRespond ONLY by calling the recommend_ercs function. ercNumbers \
         must contain bare numeric identifier strings from the catalog above \
         (e.g. \"20\", not \"ERC-20\"). Never answer in free text.",
    );
    prompt
}

/// Recommend standards for a project description.
///
/// Empty or whitespace-only input is rejected with `InvalidArgument`
/// before any network call is attempted. Identifiers the model invents
/// that do not exist in the catalog are dropped with a warning; the
/// response only ever references real catalog entries.
pub async fn recommend(
    gateway: &GatewayClient,
    description: &str,
) -> AppResult<AiRecommendation> {
    let description = description.trim();
    if description.is_empty() {
        return Err(AppError::invalid_argument(
            "description must be a non-empty string",
        ));
    }

    let system_prompt = build_system_prompt();
    let mut recommendation = gateway
        .recommend_standards(&system_prompt, description)
        .await?;

    let (known, unknown): (Vec<String>, Vec<String>) = recommendation
        .erc_numbers
        .into_iter()
        .partition(|id| is_known_standard(id));

    if !unknown.is_empty() {
        warn!(
            dropped = %unknown.join(", "),
            "⚠️ AI gateway recommended identifiers outside the catalog"
        );
    }

    recommendation.erc_numbers = known;
    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use crate::models::config::SentryConfig;

    #[test]
    fn test_system_prompt_enumerates_catalog() {
        let prompt = build_system_prompt();
        for standard in all_standards() {
            assert!(
                prompt.contains(&format!("id \"{}\"", standard.id)),
                "prompt missing {}",
                standard.id
            );
        }
        assert!(prompt.contains("recommend_ercs"));
    }

    #[tokio::test]
    async fn test_empty_description_rejected_before_network() {
        // No credential in the environment and no server running: an
        // InvalidArgument here proves rejection happened before the call.
        let gateway = GatewayClient::new(&SentryConfig::default());
        let err = recommend(&gateway, "   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }
}
