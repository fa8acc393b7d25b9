//! Generation stage error types.

use crate::LecternError;

/// Language model call failed inside a generation stage.
///
/// Carries the stage name and the error reported by the model client
/// (transport, authentication, quota or malformed response), reachable
/// through [`std::error::Error::source`].
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Generation Error in stage '{}': {} at line {} in {}", stage, source, line, file)]
pub struct GenerationError {
    /// Name of the stage whose model call failed
    pub stage: String,
    /// Underlying cause
    pub source: Box<LecternError>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use lectern_error::{GenerationError, ModelsError, ModelsErrorKind, LecternErrorKind};
    ///
    /// let cause = ModelsError::new(ModelsErrorKind::RateLimited("slow down".into()));
    /// let err = GenerationError::new("titles", cause);
    /// assert_eq!(err.stage, "titles");
    /// assert!(matches!(err.cause().kind(), LecternErrorKind::Models(_)));
    /// assert!(format!("{}", err).contains("slow down"));
    /// ```
    #[track_caller]
    pub fn new(stage: impl Into<String>, source: impl Into<LecternError>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage: stage.into(),
            source: Box::new(source.into()),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The model client error that stopped the stage.
    pub fn cause(&self) -> &LecternError {
        &self.source
    }
}
