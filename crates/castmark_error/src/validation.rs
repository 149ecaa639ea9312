//! Validation error types for run preconditions.

/// Kinds of precondition violations checked before any generation dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The episode transcript is empty or whitespace
    #[display("Episode transcript is empty")]
    EmptyTranscript,
    /// The episode transcript has fewer words than the minimum
    #[display("Transcript too short: {} words (minimum {})", words, minimum)]
    TranscriptTooShort {
        /// Whitespace-delimited word count of the supplied transcript
        words: usize,
        /// Minimum accepted word count
        minimum: usize,
    },
    /// No platform was selected for the run
    #[display("No platform selected")]
    NoPlatformSelected,
    /// Social was selected but no clip has a non-empty transcript
    #[display("Social selected but no clip has a transcript")]
    NoClipContent,
}

/// Precondition violation with location tracking.
///
/// A validation error aborts the run before any network activity.
///
/// # Examples
///
/// ```
/// use castmark_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NoPlatformSelected);
/// assert!(format!("{}", err).contains("No platform selected"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of violation that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
