//! Prompt assembly for the Castmark marketing assistant.
//!
//! Pure functions mapping a platform and episode input to the instruction
//! text (system prompt) and user message for one provider call. No state,
//! no I/O. The instruction library encodes the show's brand voice and the
//! JSON shape each platform's result must take.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assemble;
mod podcast;
mod social;
mod thumbnail;
mod youtube;

pub use assemble::{instructions, user_message};
pub use podcast::PODCAST_PLATFORMS_PROMPT;
pub use social::SOCIAL_VIRAL_PROMPT;
pub use thumbnail::THUMBNAIL_STRATEGIST_PROMPT;
pub use youtube::YOUTUBE_STRATEGIST_PROMPT;
