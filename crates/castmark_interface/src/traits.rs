//! Trait definitions for the generation and persistence boundaries.

use async_trait::async_trait;
use castmark_core::{GenerationRequest, HistoryEntry};
use castmark_error::CastmarkResult;

/// The generation boundary: one provider call per platform request.
///
/// Implementations issue exactly one network call per `generate` invocation,
/// await a single complete response (no streaming), and make no claim about
/// the returned value's shape beyond "valid JSON". No retries happen at this
/// layer.
#[async_trait]
pub trait ContentDriver: Send + Sync {
    /// Generate marketing content for one platform.
    async fn generate(&self, request: &GenerationRequest) -> CastmarkResult<serde_json::Value>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-5").
    fn model_name(&self) -> &str;
}

/// The persistence boundary: an opaque keyed store of past generations.
///
/// The list is bounded and most-recent-first; appending past capacity evicts
/// the oldest entry. No format guarantees beyond round-trip fidelity of
/// [`HistoryEntry`].
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load all entries, newest first.
    async fn load(&self) -> CastmarkResult<Vec<HistoryEntry>>;

    /// Prepend an entry, evicting the oldest past capacity.
    async fn append(&self, entry: HistoryEntry) -> CastmarkResult<HistoryEntry>;

    /// Remove the entry with the given id.
    async fn delete(&self, id: &str) -> CastmarkResult<()>;

    /// Set or clear the custom title of the entry with the given id.
    ///
    /// A `None` or blank title clears the override. Returns the updated
    /// entry.
    async fn rename(&self, id: &str, custom_title: Option<String>) -> CastmarkResult<HistoryEntry>;
}
