//! AI Gateway Client - Forced Function-Call Recommendations
//!
//! Thin client for an OpenAI-compatible chat completions endpoint. The
//! request declares exactly one callable tool and forces its invocation,
//! so the model can only answer through the structured schema: an array
//! of bare numeric identifier strings plus a free-text rationale.
//!
//! One outbound call per invocation. No retry, no caching, no
//! memoization; retry policy belongs to the caller.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::error;

use crate::models::config::SentryConfig;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::AiRecommendation;

/// The single tool the model is forced to call.
pub const TOOL_NAME: &str = "recommend_ercs";

// ============================================
// Wire types (chat completions)
// ============================================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    tools: Vec<ToolDefinition>,
    tool_choice: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ToolDefinition {
    #[serde(rename = "type")]
    kind: &'static str,
    function: FunctionDefinition,
}

#[derive(Debug, Serialize)]
struct FunctionDefinition {
    name: &'static str,
    description: &'static str,
    parameters: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: ToolCallFunction,
}

#[derive(Debug, Deserialize)]
struct ToolCallFunction {
    name: String,
    /// JSON-encoded arguments string, per the chat completions contract
    arguments: String,
}

// ============================================
// Client
// ============================================

/// Client for the upstream chat-completion gateway
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl GatewayClient {
    pub fn new(config: &SentryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.gateway_base_url.clone(),
            model: config.gateway_model.clone(),
            timeout: config.gateway_timeout,
        }
    }

    /// JSON schema for the forced tool: exactly two required fields.
    fn tool_parameters() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "ercNumbers": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Bare ERC/EIP numbers as strings, e.g. [\"20\", \"2612\"]"
                },
                "reasoning": {
                    "type": "string",
                    "description": "Why these standards fit the described project"
                }
            },
            "required": ["ercNumbers", "reasoning"]
        })
    }

    /// Run one recommendation round-trip.
    ///
    /// The credential is read per request; its absence is a fatal
    /// `ConfigurationError` before anything leaves the process. The call
    /// is bounded by the configured timeout and surfaced as `Timeout`
    /// when exceeded.
    pub async fn recommend_standards(
        &self,
        system_prompt: &str,
        description: &str,
    ) -> AppResult<AiRecommendation> {
        let key = SentryConfig::gateway_key()?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: description.to_string(),
                },
            ],
            tools: vec![ToolDefinition {
                kind: "function",
                function: FunctionDefinition {
                    name: TOOL_NAME,
                    description: "Recommend token/contract standards for the described project",
                    parameters: Self::tool_parameters(),
                },
            }],
            // Force the tool: no free-form text fallback.
            tool_choice: json!({ "type": "function", "function": { "name": TOOL_NAME } }),
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(AppError::from)?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(AppError::rate_limited());
        }
        if status.as_u16() == 402 {
            return Err(AppError::payment_required());
        }
        if !status.is_success() {
            // Log status and body for diagnostics; surface a generic failure.
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "❌ AI gateway returned non-success");
            return Err(AppError::upstream("AI gateway request failed"));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::protocol(format!("Malformed gateway response: {}", e)))?;
        Self::extract_recommendation(payload)
    }

    /// Pull the forced tool call out of a successful response.
    /// Anything short of a well-formed call is a protocol error; the
    /// request is not retried.
    fn extract_recommendation(payload: ChatResponse) -> AppResult<AiRecommendation> {
        let call = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.tool_calls)
            .and_then(|mut calls| if calls.is_empty() { None } else { Some(calls.remove(0)) })
            .ok_or_else(|| {
                AppError::protocol("AI gateway response contained no tool call")
            })?;

        if call.function.name != TOOL_NAME {
            return Err(AppError::protocol(format!(
                "AI gateway invoked unexpected tool: {}",
                call.function.name
            )));
        }

        serde_json::from_str::<AiRecommendation>(&call.function.arguments).map_err(|e| {
            AppError::protocol(format!("Malformed tool-call arguments: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    fn response_with(arguments: &str, name: &str) -> ChatResponse {
        ChatResponse {
            choices: vec![ChatChoice {
                message: ChoiceMessage {
                    tool_calls: Some(vec![ToolCall {
                        function: ToolCallFunction {
                            name: name.to_string(),
                            arguments: arguments.to_string(),
                        },
                    }]),
                },
            }],
        }
    }

    #[test]
    fn test_extract_well_formed_call() {
        let payload = response_with(
            r#"{"ercNumbers": ["20", "2612"], "reasoning": "fungible + gasless approvals"}"#,
            TOOL_NAME,
        );
        let rec = GatewayClient::extract_recommendation(payload).unwrap();
        assert_eq!(rec.erc_numbers, vec!["20", "2612"]);
        assert!(!rec.reasoning.is_empty());
    }

    #[test]
    fn test_missing_tool_call_is_protocol_error() {
        let payload = ChatResponse {
            choices: vec![ChatChoice {
                message: ChoiceMessage { tool_calls: None },
            }],
        };
        let err = GatewayClient::extract_recommendation(payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProtocolError);
    }

    #[test]
    fn test_empty_choices_is_protocol_error() {
        let payload = ChatResponse { choices: vec![] };
        let err = GatewayClient::extract_recommendation(payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProtocolError);
    }

    #[test]
    fn test_wrong_tool_name_is_protocol_error() {
        let payload = response_with(r#"{"ercNumbers": [], "reasoning": ""}"#, "other_tool");
        let err = GatewayClient::extract_recommendation(payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProtocolError);
    }

    #[test]
    fn test_malformed_arguments_is_protocol_error() {
        let payload = response_with("{not json", TOOL_NAME);
        let err = GatewayClient::extract_recommendation(payload).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProtocolError);
    }
}
