//! Error types for the Castmark library.
//!
//! This crate provides the foundation error types used throughout the Castmark
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use castmark_error::{CastmarkResult, HistoryError, HistoryErrorKind};
//!
//! fn find_entry() -> CastmarkResult<String> {
//!     Err(HistoryError::new(HistoryErrorKind::NotFound("abc".to_string())))?
//! }
//!
//! match find_entry() {
//!     Ok(entry) => println!("Got: {}", entry),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod generation;
mod history;
mod server;
mod validation;

pub use error::{CastmarkError, CastmarkErrorKind, CastmarkResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use history::{HistoryError, HistoryErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
