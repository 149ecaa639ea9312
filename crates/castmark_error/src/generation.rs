//! Generation client error types.

/// Kinds of generation failures, isolated to a single platform call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Required credential absent; fatal, surfaced before any call
    #[display("API key is not set: {}", _0)]
    MissingApiKey(String),
    /// The network call failed or the provider returned an error status
    #[display("Upstream failure: {}", _0)]
    Upstream(String),
    /// The response text is not parseable JSON after fence stripping
    #[display("Model returned invalid JSON: {}", message)]
    InvalidResponse {
        /// Parse error message
        message: String,
        /// The raw response text, preserved for inspection
        raw: String,
    },
    /// Builder error when constructing wire types
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Generation error with location tracking.
///
/// No retries happen at this layer; a failed call is reported once and
/// retry is a user-initiated re-run at the orchestrator level.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use castmark_error::{GenerationError, GenerationErrorKind};
    ///
    /// let err = GenerationError::new(GenerationErrorKind::Upstream("503".into()));
    /// assert!(format!("{}", err).contains("Upstream"));
    /// ```
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
