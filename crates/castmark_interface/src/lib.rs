//! Trait definitions for the Castmark external boundaries.
//!
//! Two collaborators are opaque to the orchestration core: the LLM provider
//! (a request/response boundary) and the history store (a keyed persistence
//! boundary). Both are injected as explicit handles so the core is testable
//! with fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentDriver, HistoryStore};
