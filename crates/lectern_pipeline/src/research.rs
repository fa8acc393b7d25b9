//! Research lookup on the submitted topic.

use lectern_error::{ResearchError, ResearchErrorKind};
use lectern_interface::ResearchSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What a run does when the research lookup fails.
///
/// # Examples
///
/// ```
/// use lectern_pipeline::ResearchPolicy;
///
/// assert_eq!("degrade".parse::<ResearchPolicy>().unwrap(), ResearchPolicy::Degrade);
/// assert_eq!(ResearchPolicy::default().to_string(), "abort");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResearchPolicy {
    /// Fail the run at the research step.
    #[default]
    Abort,
    /// Log a warning and continue with empty research text.
    Degrade,
}

/// Queries a [`ResearchSource`] and classifies its answer.
#[derive(Debug, Clone)]
pub struct ResearchLookup<S> {
    source: S,
}

impl<S: ResearchSource> ResearchLookup<S> {
    /// Wrap a research source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look `query` up and return the source's text.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the source could not be reached
    /// - `NoResults` if the source answered with nothing but whitespace
    #[instrument(skip(self), fields(source = self.source.source_name()))]
    pub async fn lookup(&self, query: &str) -> Result<String, ResearchError> {
        let source_name = self.source.source_name();
        debug!("Starting research lookup");

        let text = self.source.search(query).await.map_err(|e| {
            warn!(source = source_name, error = %e, "Research source unavailable");
            ResearchError::new(ResearchErrorKind::Unavailable {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })
        })?;

        if text.trim().is_empty() {
            return Err(ResearchError::new(ResearchErrorKind::NoResults(
                query.to_string(),
            )));
        }

        debug!(source = source_name, chars = text.len(), "Research lookup complete");
        Ok(text)
    }
}
