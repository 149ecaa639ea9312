//! Short clip transcripts attached to an episode.

use serde::{Deserialize, Serialize};

/// A short clip pulled from an episode, used for social asset generation.
///
/// # Examples
///
/// ```
/// use castmark_core::ShortClip;
///
/// let clip = ShortClip::new("Dolphins rant", "We need to talk about that fourth quarter...");
/// assert!(clip.has_content());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortClip {
    /// Opaque clip identifier
    pub id: String,
    /// Editor-facing label for the clip
    pub label: String,
    /// Transcript of the clip audio
    pub transcript: String,
}

impl ShortClip {
    /// Create a clip with a fresh identifier.
    pub fn new(label: impl Into<String>, transcript: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label: label.into(),
            transcript: transcript.into(),
        }
    }

    /// Whether the clip transcript contains anything besides whitespace.
    pub fn has_content(&self) -> bool {
        !self.transcript.trim().is_empty()
    }
}
