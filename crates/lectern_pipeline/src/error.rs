//! Run-level failure type.

use crate::{PipelineStage, RunState};
use lectern_error::LecternError;

/// A pipeline run that stopped before producing a script.
///
/// Names the step that failed, the last state the run reached before it, and
/// the underlying cause.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display(
    "Pipeline failed at stage '{}' after reaching '{}': {} at line {} in {}",
    stage,
    reached,
    source,
    line,
    file
)]
pub struct PipelineError {
    /// Step that failed
    pub stage: PipelineStage,
    /// Last state reached before the failure
    pub reached: RunState,
    /// Underlying cause
    pub source: LecternError,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(stage: PipelineStage, reached: RunState, source: impl Into<LecternError>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            stage,
            reached,
            source: source.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
