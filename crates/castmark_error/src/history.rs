//! History store error types.

/// Kinds of history persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HistoryErrorKind {
    /// Failed to create the history directory
    #[display("Failed to create history directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the history file
    #[display("Failed to write history file: {}", _0)]
    FileWrite(String),
    /// Failed to read the history file
    #[display("Failed to read history file: {}", _0)]
    FileRead(String),
    /// Failed to serialize history entries
    #[display("Failed to serialize history: {}", _0)]
    Serialize(String),
    /// No entry with the given id
    #[display("History entry not found: {}", _0)]
    NotFound(String),
}

/// History error with location tracking.
///
/// # Examples
///
/// ```
/// use castmark_error::{HistoryError, HistoryErrorKind};
///
/// let err = HistoryError::new(HistoryErrorKind::NotFound("abc".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("History Error: {} at line {} in {}", kind, line, file)]
pub struct HistoryError {
    /// The kind of error that occurred
    pub kind: HistoryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl HistoryError {
    /// Create a new history error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HistoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
