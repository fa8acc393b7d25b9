//! Sequencing of the title stage, the research lookup and the script stage.

use crate::templates::{SCRIPT_INPUT_KEY, TITLE_INPUT_KEY, WIKIPEDIA_RESEARCH_SLOT};
use crate::{
    GenerationSettings, GenerationStage, PipelineConfig, PipelineError, ResearchLookup,
    ResearchPolicy,
};
use lectern_core::{HistoryStore, SlotValues};
use lectern_error::{
    LecternError, LecternResult, TemplateError, TemplateErrorKind, ValidationError,
    ValidationErrorKind,
};
use lectern_interface::{LanguageModel, ResearchSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Progress of the current (or last) run.
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
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunState {
    /// Nothing has happened yet.
    #[default]
    Idle,
    /// The title stage produced at least one title.
    TitlesGenerated,
    /// Research text is available (possibly empty when degraded).
    ResearchFetched,
    /// The script stage finished; the run succeeded.
    ScriptGenerated,
    /// The run stopped on an error.
    Failed,
}

/// The step of a run that an error is attributed to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PipelineStage {
    /// Topic validation.
    Input,
    /// Title generation.
    Titles,
    /// Research lookup.
    Research,
    /// Script generation.
    Script,
}

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PipelineRun {
    /// Submitted topic, as given
    topic: String,
    /// Non-blank, trimmed lines of the title output
    titles: Vec<String>,
    /// Title output exactly as the model returned it
    raw_titles: String,
    /// Research text handed to the script stage
    research: String,
    /// Script output
    script: String,
    /// Final state of the run
    state: RunState,
}

/// Split a title block into titles: one per line, trimmed, blanks dropped.
///
/// # Examples
///
/// ```
/// use lectern_pipeline::split_titles;
///
/// assert_eq!(split_titles("A\n\nB\nC "), vec!["A", "B", "C"]);
/// assert!(split_titles(" \n\t\n").is_empty());
/// ```
pub fn split_titles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs topic → titles → research → script.
///
/// Each orchestrator owns both stages, so histories accumulate across
/// submissions. `submit` takes `&mut self`: one run at a time.
#[derive(Debug)]
pub struct PipelineOrchestrator<D, S> {
    config: PipelineConfig,
    title_stage: GenerationStage<D>,
    script_stage: GenerationStage<D>,
    research: ResearchLookup<S>,
    state: RunState,
}

impl<D, S> PipelineOrchestrator<D, S>
where
    D: LanguageModel,
    S: ResearchSource,
{
    /// Build both stages from `config`.
    ///
    /// # Errors
    ///
    /// - [`lectern_error::ConfigError`] for out-of-range settings
    /// - [`TemplateError`] if a template is malformed or lacks a slot the
    ///   pipeline fills (`topic`, `title`, `wikipedia_research`)
    pub fn new(config: PipelineConfig, driver: D, source: S) -> LecternResult<Self> {
        config.validate()?;

        let driver = Arc::new(driver);
        let settings = GenerationSettings::new(
            config.model().clone(),
            Some(*config.temperature()),
            *config.max_tokens(),
        );

        let title_template = config.title_template().build("titles")?;
        let script_template = config.script_template().build("script")?;
        if !script_template.declares(WIKIPEDIA_RESEARCH_SLOT) {
            return Err(TemplateError::new(TemplateErrorKind::RequiredSlotMissing {
                template: script_template.name().clone(),
                slot: WIKIPEDIA_RESEARCH_SLOT.to_string(),
            })
            .into());
        }

        let title_stage = GenerationStage::new(
            "titles",
            title_template,
            Arc::clone(&driver),
            TITLE_INPUT_KEY,
            settings.clone(),
        )?;
        let script_stage =
            GenerationStage::new("script", script_template, driver, SCRIPT_INPUT_KEY, settings)?;

        info!(
            research_policy = %config.research_policy(),
            title_memory = title_stage.uses_memory(),
            script_memory = script_stage.uses_memory(),
            "Pipeline ready"
        );

        Ok(Self {
            config,
            title_stage,
            script_stage,
            research: ResearchLookup::new(source),
            state: RunState::Idle,
        })
    }

    /// Run the whole pipeline for `topic`.
    ///
    /// Research is looked up on the topic itself, and the script stage gets
    /// the full raw title block as its `title`.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] naming the failing step and the last state
    /// reached. Under [`ResearchPolicy::Degrade`] research failures are not
    /// errors.
    #[instrument(skip(self), fields(policy = %self.config.research_policy()))]
    pub async fn submit(&mut self, topic: &str) -> Result<PipelineRun, PipelineError> {
        self.state = RunState::Idle;

        if topic.trim().is_empty() {
            return Err(self.fail(
                PipelineStage::Input,
                ValidationError::new(ValidationErrorKind::EmptyTopic),
            ));
        }

        info!("Generating titles");
        let mut title_inputs = SlotValues::new();
        title_inputs.insert(TITLE_INPUT_KEY.to_string(), topic.to_string());
        let outcome = self.title_stage.run(&title_inputs).await;
        let raw_titles = match outcome {
            Ok(text) => text,
            Err(e) => return Err(self.fail(PipelineStage::Titles, e)),
        };
        let titles = split_titles(&raw_titles);
        self.state = RunState::TitlesGenerated;
        info!(count = titles.len(), "Titles generated");

        let policy = *self.config.research_policy();
        let outcome = self.research.lookup(topic).await;
        let research = match (outcome, policy) {
            (Ok(text), _) => text,
            (Err(e), ResearchPolicy::Degrade) => {
                warn!(error = %e, "Research unavailable, continuing without it");
                String::new()
            }
            (Err(e), ResearchPolicy::Abort) => {
                return Err(self.fail(PipelineStage::Research, e));
            }
        };
        self.state = RunState::ResearchFetched;

        info!("Generating script");
        let mut script_inputs = SlotValues::new();
        script_inputs.insert(SCRIPT_INPUT_KEY.to_string(), raw_titles.clone());
        script_inputs.insert(WIKIPEDIA_RESEARCH_SLOT.to_string(), research.clone());
        let outcome = self.script_stage.run(&script_inputs).await;
        let script = match outcome {
            Ok(text) => text,
            Err(e) => return Err(self.fail(PipelineStage::Script, e)),
        };
        self.state = RunState::ScriptGenerated;
        info!(script_len = script.len(), "Run complete");

        Ok(PipelineRun {
            topic: topic.to_string(),
            titles,
            raw_titles,
            research,
            script,
            state: self.state,
        })
    }

    #[track_caller]
    fn fail(&mut self, stage: PipelineStage, cause: impl Into<LecternError>) -> PipelineError {
        let reached = self.state;
        self.state = RunState::Failed;
        let err = PipelineError::new(stage, reached, cause);
        error!(%stage, %reached, error = %err.source, "Run failed");
        err
    }

    /// State of the current or most recent run.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Configuration the pipeline was built from.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// History of the title stage, keyed by topic.
    pub fn title_history(&self) -> &HistoryStore {
        self.title_stage.history()
    }

    /// History of the script stage, keyed by the raw title block.
    pub fn script_history(&self) -> &HistoryStore {
        self.script_stage.history()
    }

    /// The title stage, for inspecting its next prompt.
    pub fn title_stage(&self) -> &GenerationStage<D> {
        &self.title_stage
    }

    /// The script stage, for inspecting its next prompt.
    pub fn script_stage(&self) -> &GenerationStage<D> {
        &self.script_stage
    }

    /// The research lookup.
    pub fn research(&self) -> &ResearchLookup<S> {
        &self.research
    }
}
