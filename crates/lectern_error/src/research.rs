//! Research lookup error types.

/// Specific error conditions for research lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ResearchErrorKind {
    /// The reference source could not be reached or returned an error
    #[display("Research source '{}' unavailable: {}", source_name, message)]
    Unavailable {
        /// Name of the research source
        source_name: String,
        /// Underlying cause
        message: String,
    },
    /// The reference source answered but had nothing usable for the query
    #[display("No research results for '{}'", _0)]
    NoResults(String),
}

/// Error type for research lookups.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Research Error: {} at line {} in {}", kind, line, file)]
pub struct ResearchError {
    /// The specific error condition
    pub kind: ResearchErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ResearchError {
    /// Create a new ResearchError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResearchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
