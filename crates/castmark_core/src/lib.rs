//! Core data types for the Castmark marketing assistant.
//!
//! This crate provides the foundation data types shared across the Castmark
//! workspace: the platform set, episode inputs, per-run status tracking and
//! history entries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clip;
mod history;
mod input;
mod platform;
mod request;
mod run;
mod status;

pub use clip::ShortClip;
pub use history::HistoryEntry;
pub use input::{EpisodeInput, EpisodeInputBuilder, EpisodeInputBuilderError, MIN_TRANSCRIPT_WORDS};
pub use platform::Platform;
pub use request::GenerationRequest;
pub use run::{GenerationRun, PlatformFailure, RunId, RunOutcome};
pub use status::PlatformStatus;
