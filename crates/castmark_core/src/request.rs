//! Per-platform generation request.

use crate::{EpisodeInput, Platform};
use serde::{Deserialize, Serialize};

/// One platform's worth of work for the generation client.
///
/// The orchestrator builds one request per selected platform from the shared
/// [`EpisodeInput`].
///
/// # Examples
///
/// ```
/// use castmark_core::{EpisodeInput, GenerationRequest, Platform};
///
/// let input = EpisodeInput::builder().transcript("...").build().unwrap();
/// let request = GenerationRequest::new(Platform::YouTube, input);
/// assert_eq!(*request.platform(), Platform::YouTube);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationRequest {
    /// The platform this request targets
    platform: Platform,
    /// The shared episode input
    input: EpisodeInput,
}

impl GenerationRequest {
    /// Create a request for one platform.
    pub fn new(platform: Platform, input: EpisodeInput) -> Self {
        Self { platform, input }
    }
}
