//! Episode input data supplied by the user.

use crate::ShortClip;
use serde::{Deserialize, Serialize};

/// Minimum whitespace-delimited word count for an episode transcript.
pub const MIN_TRANSCRIPT_WORDS: usize = 50;

/// Everything the user supplies for one generation run.
///
/// # Examples
///
/// ```
/// use castmark_core::EpisodeInput;
///
/// let input = EpisodeInput::builder()
///     .episode_number("19")
///     .episode_topic("Dolphins meltdown")
///     .transcript("So here's the thing about Sunday's game...")
///     .build()
///     .unwrap();
///
/// assert_eq!(input.episode_number().as_deref(), Some("19"));
/// assert!(input.clips().is_empty());
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct EpisodeInput {
    /// Episode number, when known
    #[builder(setter(strip_option), default)]
    episode_number: Option<String>,
    /// Working title or topic, when known
    #[builder(setter(strip_option), default)]
    episode_topic: Option<String>,
    /// The full episode transcript
    transcript: String,
    /// Short clip transcripts, in editor order
    #[builder(default)]
    clips: Vec<ShortClip>,
}

impl EpisodeInput {
    /// Start building an episode input.
    pub fn builder() -> EpisodeInputBuilder {
        EpisodeInputBuilder::default()
    }

    /// Whitespace-delimited word count of the transcript.
    pub fn word_count(&self) -> usize {
        self.transcript.split_whitespace().count()
    }

    /// Clips whose transcripts contain actual content.
    pub fn clips_with_content(&self) -> Vec<&ShortClip> {
        self.clips.iter().filter(|c| c.has_content()).collect()
    }
}
