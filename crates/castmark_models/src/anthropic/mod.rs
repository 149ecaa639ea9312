//! Anthropic Messages API wire types and client.

mod client;

pub use client::{API_KEY_VAR, AnthropicClient, DEFAULT_MODEL};

use serde::{Deserialize, Serialize};

/// One content block in a request message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnthropicContentBlock {
    /// Plain text content
    Text {
        /// The text payload
        text: String,
    },
}

/// One message in an Anthropic conversation.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// "user" or "assistant"
    role: String,
    /// Content blocks for this message
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Start building a message.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }

    /// A single-block user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![AnthropicContentBlock::Text { text: text.into() }],
        }
    }
}

/// Request body for `POST /v1/messages`.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// System-level behavior contract (the platform instruction text)
    system: String,
    /// Conversation messages
    messages: Vec<AnthropicMessage>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(setter(strip_option), default)]
    temperature: Option<f32>,
}

impl AnthropicRequest {
    /// Start building a request.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// One content block in a response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnthropicResponseBlock {
    /// Block type discriminator ("text" for text blocks)
    #[serde(rename = "type")]
    pub block_type: String,
    /// Text payload, empty for non-text blocks
    #[serde(default)]
    pub text: String,
}

/// Response body from `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Deserialize, derive_getters::Getters)]
pub struct AnthropicResponse {
    /// Provider-assigned response id
    id: String,
    /// Content blocks of the single complete response
    content: Vec<AnthropicResponseBlock>,
    /// Why generation stopped, when reported
    #[serde(default)]
    stop_reason: Option<String>,
}

impl AnthropicResponse {
    /// Concatenated text of all text blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.block_type == "text")
            .map(|block| block.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_fields() {
        let request = AnthropicRequest::builder()
            .model("claude-sonnet-4-6")
            .max_tokens(8192u32)
            .system("You are a strategist.")
            .messages(vec![AnthropicMessage::user("Transcript here")])
            .build()
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-6");
        assert_eq!(json["max_tokens"], 8192);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn response_text_joins_text_blocks() {
        let response: AnthropicResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_01",
            "content": [
                {"type": "text", "text": "{\"a\":"},
                {"type": "text", "text": "1}"}
            ],
            "stop_reason": "end_turn"
        }))
        .unwrap();
        assert_eq!(response.text(), "{\"a\":1}");
    }
}
