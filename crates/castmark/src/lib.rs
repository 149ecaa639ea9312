//! Castmark - Podcast Content-Marketing Assistant
//!
//! Castmark turns one podcast episode transcript into platform-ready
//! marketing content: YouTube strategy, thumbnail briefs, podcast listings,
//! and social clip assets. One user action fans out to every selected
//! platform concurrently, and completed runs with at least one success are
//! saved to a bounded local history.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use castmark::{
//!     AnthropicClient, EpisodeInput, FileHistory, Orchestrator, Platform,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> castmark::CastmarkResult<()> {
//!     let driver = Arc::new(AnthropicClient::from_env()?);
//!     let history = Arc::new(FileHistory::new("castmark_history.json")?);
//!     let orchestrator = Orchestrator::new(driver, history);
//!
//!     let input = EpisodeInput::builder()
//!         .episode_number("19")
//!         .episode_topic("Trade deadline meltdown")
//!         .transcript(std::fs::read_to_string("episode_19.txt").unwrap())
//!         .build()
//!         .unwrap();
//!
//!     let (outcome, _entry) = orchestrator
//!         .run(input, &[Platform::YouTube, Platform::Podcast])
//!         .await?;
//!     println!("{} platforms succeeded", outcome.results.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Castmark is organized as a workspace with focused crates:
//!
//! - `castmark_core` - Core data types (EpisodeInput, Platform, runs, history entries)
//! - `castmark_interface` - ContentDriver and HistoryStore trait definitions
//! - `castmark_error` - Error types
//! - `castmark_prompts` - Per-platform instruction text and prompt assembly
//! - `castmark_models` - Anthropic Messages API client
//! - `castmark_history` - File-backed run history
//! - `castmark_run` - Concurrent generation orchestrator
//! - `castmark_server` - HTTP surface (separate binary crate)
//!
//! This crate (`castmark`) re-exports the library crates for convenience.

#![forbid(unsafe_code)]

pub use castmark_core::*;
pub use castmark_error::*;
pub use castmark_history::*;
pub use castmark_interface::*;
pub use castmark_models::*;
pub use castmark_prompts::*;
pub use castmark_run::*;
