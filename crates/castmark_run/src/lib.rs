//! Concurrent generation orchestration for Castmark.
//!
//! One user action becomes one [`castmark_core::GenerationRun`]: the
//! orchestrator validates the episode input, marks every selected platform
//! `Pending`, dispatches one provider call per platform concurrently, and
//! merges the terminal statuses into a [`castmark_core::RunOutcome`]. A run
//! with at least one success is appended to history exactly once, after all
//! platforms settle.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod orchestrator;
mod validate;

pub use orchestrator::{Orchestrator, RunEvent, RunHandle};
pub use validate::validate_input;
