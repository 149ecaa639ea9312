//! Top-level error wrapper types.

use crate::{GenerationError, HistoryError, ServerError, ValidationError};

/// The foundation error enum for the Castmark workspace.
///
/// # Examples
///
/// ```
/// use castmark_error::{CastmarkError, GenerationError, GenerationErrorKind};
///
/// let gen_err = GenerationError::new(GenerationErrorKind::Upstream("503".into()));
/// let err: CastmarkError = gen_err.into();
/// assert!(format!("{}", err).contains("Upstream"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CastmarkErrorKind {
    /// Run precondition violation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generation client error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// History store error
    #[from(HistoryError)]
    History(HistoryError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Castmark error with kind discrimination.
///
/// # Examples
///
/// ```
/// use castmark_error::{CastmarkResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> CastmarkResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::NoPlatformSelected))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Castmark Error: {}", _0)]
pub struct CastmarkError(Box<CastmarkErrorKind>);

impl CastmarkError {
    /// Create a new error from a kind.
    pub fn new(kind: CastmarkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CastmarkErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CastmarkErrorKind
impl<T> From<T> for CastmarkError
where
    T: Into<CastmarkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Castmark operations.
///
/// # Examples
///
/// ```
/// use castmark_error::{CastmarkResult, HistoryError, HistoryErrorKind};
///
/// fn read_history() -> CastmarkResult<String> {
///     Err(HistoryError::new(HistoryErrorKind::FileRead("permission denied".into())))?
/// }
/// ```
pub type CastmarkResult<T> = std::result::Result<T, CastmarkError>;
