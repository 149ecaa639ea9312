//! LLM provider integration for Castmark.
//!
//! This crate provides the Anthropic Messages API client behind the
//! [`castmark_interface::ContentDriver`] trait: one request per platform,
//! a single complete response per call, fence stripping and JSON parsing of
//! the model's text output. No retries and no streaming.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod clean;

pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicMessageBuilder,
    AnthropicRequest, AnthropicRequestBuilder, AnthropicResponse, AnthropicResponseBlock,
    API_KEY_VAR, DEFAULT_MODEL,
};
pub use clean::strip_fences;
