//! File-backed generation history for Castmark.
//!
//! Implements the [`castmark_interface::HistoryStore`] boundary with a
//! single JSON file: a newest-first list of [`castmark_core::HistoryEntry`]
//! values capped at twenty entries, with atomic temp-file + rename writes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;

pub use file::{FileHistory, HISTORY_CAPACITY};
