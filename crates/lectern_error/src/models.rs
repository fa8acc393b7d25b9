//! Model provider errors.

/// Provider-specific error conditions for language model clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Request could not be sent or the connection dropped
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// Provider rejected the credentials
    #[display("Authentication failed ({}): {}", status, message)]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Provider quota or rate limit hit
    #[display("Rate limited: {}", _0)]
    RateLimited(String),
    /// Provider returned another non-success status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Failed to parse response: {}", _0)]
    Parse(String),
    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl ModelsErrorKind {
    /// Map a non-success HTTP status and body to an error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use lectern_error::ModelsErrorKind;
    ///
    /// let kind = ModelsErrorKind::from_status(429, "slow down");
    /// assert_eq!(kind, ModelsErrorKind::RateLimited("slow down".to_string()));
    /// ```
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let message = body.into();
        match status {
            401 | 403 => Self::Authentication { status, message },
            429 => Self::RateLimited(message),
            _ => Self::Api { status, message },
        }
    }
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
