//! Prompt template error types.

/// Specific error conditions for prompt templates.
///
/// The first group is detected when a template is constructed; the second when
/// it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Placeholder appears in the template text but is not declared
    #[display("Template '{}' uses undeclared slot '{}'", template, slot)]
    UndeclaredSlot {
        /// Template name
        template: String,
        /// Slot name
        slot: String,
    },
    /// Slot is declared but never appears in the template text
    #[display("Template '{}' declares slot '{}' but never uses it", template, slot)]
    UnusedSlot {
        /// Template name
        template: String,
        /// Slot name
        slot: String,
    },
    /// Slot is declared more than once
    #[display("Template '{}' declares slot '{}' more than once", template, slot)]
    DuplicateSlot {
        /// Template name
        template: String,
        /// Slot name
        slot: String,
    },
    /// Brace that is neither an escape nor a well-formed placeholder
    #[display("Template '{}' has a malformed placeholder at byte {}", template, offset)]
    MalformedPlaceholder {
        /// Template name
        template: String,
        /// Byte offset of the offending brace
        offset: usize,
    },
    /// A slot the stage or pipeline must fill is not declared by the template
    #[display("Template '{}' does not declare required slot '{}'", template, slot)]
    RequiredSlotMissing {
        /// Template name
        template: String,
        /// Slot name
        slot: String,
    },
    /// Declared slot had no value at render time
    #[display("Missing value for slot '{}'", _0)]
    MissingSlot(String),
    /// Supplied value does not correspond to a declared slot
    #[display("Unknown slot '{}'", _0)]
    UnknownSlot(String),
    /// Caller supplied a value for a slot the stage fills itself
    #[display("Slot '{}' is reserved and filled by the stage", _0)]
    ReservedSlot(String),
}

impl TemplateErrorKind {
    /// Whether this condition is a construction-time configuration error.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UndeclaredSlot { .. }
                | Self::UnusedSlot { .. }
                | Self::DuplicateSlot { .. }
                | Self::MalformedPlaceholder { .. }
                | Self::RequiredSlotMissing { .. }
        )
    }
}

/// Error type for prompt template construction and rendering.
///
/// # Examples
///
/// ```
/// use lectern_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::MissingSlot("topic".to_string()));
/// assert!(format!("{}", err).contains("topic"));
/// assert!(!err.kind.is_config());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
