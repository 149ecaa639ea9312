//! Anthropic API client.

use crate::anthropic::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::strip_fences;
use castmark_core::GenerationRequest;
use castmark_error::{CastmarkResult, GenerationError, GenerationErrorKind};
use castmark_interface::ContentDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 8192;

/// Environment variable holding the Anthropic API key.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Default model when `CASTMARK_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-6";

/// Anthropic API client.
///
/// Issues exactly one network call per [`ContentDriver::generate`]
/// invocation and never retries; retry is a user-initiated re-run at the
/// orchestrator level.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-sonnet-4-6")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Creates a client from the environment.
    ///
    /// Reads `ANTHROPIC_API_KEY` (required) and `CASTMARK_MODEL` (optional,
    /// defaults to [`DEFAULT_MODEL`]). A missing key is a configuration
    /// error surfaced here, before any call is attempted.
    pub fn from_env() -> CastmarkResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GenerationError::new(GenerationErrorKind::MissingApiKey(format!(
                    "{API_KEY_VAR} is not set"
                )))
            })?;
        let model =
            std::env::var("CASTMARK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    /// Sends one request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn send(&self, request: &AnthropicRequest) -> CastmarkResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                GenerationError::new(GenerationErrorKind::Upstream(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Upstream(format!(
                "API error {}: {}",
                status.as_u16(),
                body
            )))
            .into());
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response envelope");
            GenerationError::new(GenerationErrorKind::Upstream(format!(
                "Failed to parse response envelope: {}",
                e
            )))
        })?;

        debug!(response_id = %anthropic_response.id(), "Received response from Anthropic");
        Ok(anthropic_response)
    }

    /// Converts a Castmark request to an Anthropic API request.
    fn convert_request(&self, request: &GenerationRequest) -> CastmarkResult<AnthropicRequest> {
        let system = castmark_prompts::instructions(*request.platform());
        let user = castmark_prompts::user_message(*request.platform(), request.input());

        AnthropicRequest::builder()
            .model(&self.model)
            .max_tokens(MAX_TOKENS)
            .system(system)
            .messages(vec![AnthropicMessage::user(user)])
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Builder(e.to_string())).into()
            })
    }

    /// Extracts the JSON payload from the response text.
    ///
    /// Strips a wrapping code fence, trims, and parses. The raw text is
    /// preserved on parse failure so the caller can inspect what the model
    /// actually returned.
    fn parse_payload(raw: &str) -> CastmarkResult<serde_json::Value> {
        let cleaned = strip_fences(raw);
        serde_json::from_str(cleaned).map_err(|e| {
            GenerationError::new(GenerationErrorKind::InvalidResponse {
                message: e.to_string(),
                raw: raw.to_string(),
            })
            .into()
        })
    }
}

#[async_trait::async_trait]
impl ContentDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(platform = %request.platform()))]
    async fn generate(&self, request: &GenerationRequest) -> CastmarkResult<serde_json::Value> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::MissingApiKey(
                format!("{API_KEY_VAR} is not set"),
            ))
            .into());
        }

        let anthropic_request = self.convert_request(request)?;
        let response = self.send(&anthropic_request).await?;
        let payload = Self::parse_payload(&response.text())?;

        debug!(platform = %request.platform(), "Parsed platform payload");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castmark_core::{EpisodeInput, Platform};
    use castmark_error::CastmarkErrorKind;

    fn request(platform: Platform) -> GenerationRequest {
        let input = EpisodeInput::builder()
            .episode_number("4")
            .transcript("Enough words to build a prompt from.")
            .build()
            .unwrap();
        GenerationRequest::new(platform, input)
    }

    #[test]
    fn convert_request_uses_platform_instructions() {
        let client = AnthropicClient::new("key", DEFAULT_MODEL);
        let converted = client.convert_request(&request(Platform::Podcast)).unwrap();
        assert!(converted.system().contains("podcast platform optimization"));
        assert_eq!(converted.messages().len(), 1);
        assert_eq!(*converted.max_tokens(), MAX_TOKENS);
    }

    #[test]
    fn parse_payload_strips_fences() {
        let raw = "```json\n{\"titles\":[\"A\"]}\n```";
        let value = AnthropicClient::parse_payload(raw).unwrap();
        assert_eq!(value["titles"][0], "A");
    }

    #[test]
    fn parse_payload_preserves_raw_text_on_failure() {
        let raw = "Sorry, I can't do that.";
        let err = AnthropicClient::parse_payload(raw).unwrap_err();
        match err.kind() {
            CastmarkErrorKind::Generation(inner) => match &inner.kind {
                GenerationErrorKind::InvalidResponse { raw: kept, .. } => {
                    assert_eq!(kept, raw);
                }
                other => panic!("unexpected kind: {other:?}"),
            },
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_fails_fast_without_api_key() {
        let client = AnthropicClient::new("", DEFAULT_MODEL);
        let err = client.generate(&request(Platform::YouTube)).await.unwrap_err();
        assert!(matches!(err.kind(), CastmarkErrorKind::Generation(_)));
    }
}
