//! HTTP surface for Castmark.
//!
//! A thin axum layer over the orchestrator and history store:
//! single-platform generation at `POST /api/generate`, concurrent multi-
//! platform runs at `POST /api/run`, and history management under
//! `/api/history`. Handlers translate [`castmark_error::CastmarkError`]
//! kinds into status codes and JSON error bodies.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod state;

pub use api::{ApiError, app};
pub use state::AppState;
