//! Mapping from platform + episode input to provider messages.

use crate::{
    PODCAST_PLATFORMS_PROMPT, SOCIAL_VIRAL_PROMPT, THUMBNAIL_STRATEGIST_PROMPT,
    YOUTUBE_STRATEGIST_PROMPT,
};
use castmark_core::{EpisodeInput, Platform};
use std::fmt::Write;

/// The instruction text (system prompt) for one platform.
pub fn instructions(platform: Platform) -> &'static str {
    match platform {
        Platform::YouTube => YOUTUBE_STRATEGIST_PROMPT,
        Platform::Thumbnail => THUMBNAIL_STRATEGIST_PROMPT,
        Platform::Podcast => PODCAST_PLATFORMS_PROMPT,
        Platform::Social => SOCIAL_VIRAL_PROMPT,
    }
}

/// The user message for one platform call.
///
/// Header lines carry the episode number and topic when present, followed by
/// the full transcript. For [`Platform::Social`] the numbered clip sections
/// are appended; clips with blank transcripts never reach the prompt.
pub fn user_message(platform: Platform, input: &EpisodeInput) -> String {
    let mut message = String::new();
    if let Some(number) = input.episode_number() {
        let _ = writeln!(message, "Episode Number: {number}");
    }
    if let Some(topic) = input.episode_topic() {
        let _ = writeln!(message, "Episode Topic: {topic}");
    }
    if !message.is_empty() {
        message.push('\n');
    }
    let _ = write!(message, "FULL EPISODE TRANSCRIPT:\n{}", input.transcript());

    if platform == Platform::Social {
        let clips = input.clips_with_content();
        if !clips.is_empty() {
            message.push_str("\n\nSHORT CLIPS TO PROCESS:\n");
            for (index, clip) in clips.iter().enumerate() {
                if index > 0 {
                    message.push_str("\n\n");
                }
                let _ = write!(
                    message,
                    "--- CLIP {}: {} ---\n{}",
                    index + 1,
                    clip.label,
                    clip.transcript
                );
            }
        }
    }

    message
}
