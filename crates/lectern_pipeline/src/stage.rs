//! A single prompt → model → history step.

use lectern_core::{CHAT_HISTORY_SLOT, GenerateRequest, HistoryStore, PromptTemplate, SlotValues};
use lectern_error::{
    GenerationError, LecternResult, ModelsError, ModelsErrorKind, TemplateError,
    TemplateErrorKind, ValidationError, ValidationErrorKind,
};
use lectern_interface::LanguageModel;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Per-call model parameters applied by a stage.
#[derive(Debug, Clone, PartialEq, Default, derive_getters::Getters)]
pub struct GenerationSettings {
    /// Model identifier; the driver's default when `None`
    model: Option<String>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Maximum tokens to generate
    max_tokens: Option<u32>,
}

impl GenerationSettings {
    /// Bundle model parameters.
    pub fn new(model: Option<String>, temperature: Option<f32>, max_tokens: Option<u32>) -> Self {
        Self {
            model,
            temperature,
            max_tokens,
        }
    }
}

/// One template bound to a language model and its own history.
///
/// When the template declares `chat_history`, every render receives the
/// stage's accumulated history under that slot. Callers never supply it.
#[derive(Debug)]
pub struct GenerationStage<D> {
    name: String,
    template: PromptTemplate,
    driver: Arc<D>,
    history: HistoryStore,
    primary_key: String,
    settings: GenerationSettings,
}

impl<D: LanguageModel> GenerationStage<D> {
    /// Bind a template to a driver.
    ///
    /// # Errors
    ///
    /// Returns `RequiredSlotMissing` if the template does not declare
    /// `primary_key`.
    pub fn new(
        name: impl Into<String>,
        template: PromptTemplate,
        driver: Arc<D>,
        primary_key: impl Into<String>,
        settings: GenerationSettings,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        let primary_key = primary_key.into();

        if !template.declares(&primary_key) {
            return Err(TemplateError::new(TemplateErrorKind::RequiredSlotMissing {
                template: template.name().clone(),
                slot: primary_key,
            }));
        }

        let history = HistoryStore::new(primary_key.as_str());
        Ok(Self {
            name,
            template,
            driver,
            history,
            primary_key,
            settings,
        })
    }

    /// Stage name used in logs and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound template.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Slot whose value keys each history entry.
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Read-only view of the stage's history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Model parameters used for each call.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Whether renders receive the running conversation.
    pub fn uses_memory(&self) -> bool {
        self.template.declares(CHAT_HISTORY_SLOT)
    }

    /// Render the exact prompt `run` would send, without calling the model.
    ///
    /// # Errors
    ///
    /// - `ReservedSlot` if `inputs` contains `chat_history`
    /// - any render error of the template
    pub fn prepare(&self, inputs: &SlotValues) -> Result<String, TemplateError> {
        if inputs.contains_key(CHAT_HISTORY_SLOT) {
            return Err(TemplateError::new(TemplateErrorKind::ReservedSlot(
                CHAT_HISTORY_SLOT.to_string(),
            )));
        }

        if self.uses_memory() {
            let mut merged = inputs.clone();
            merged.insert(CHAT_HISTORY_SLOT.to_string(), self.history.as_context());
            self.template.render(&merged)
        } else {
            self.template.render(inputs)
        }
    }

    /// Render, call the model once, record the exchange and return the output.
    ///
    /// History is only written after a non-empty model answer.
    ///
    /// # Errors
    ///
    /// - [`TemplateError`] if the inputs do not fit the template (no model call)
    /// - [`GenerationError`] if the model call fails
    /// - [`ValidationError`] (`EmptyOutput`) if the model returns only whitespace
    #[instrument(skip(self, inputs), fields(stage = %self.name))]
    pub async fn run(&mut self, inputs: &SlotValues) -> LecternResult<String> {
        let prompt = self.prepare(inputs)?;
        debug!(stage = %self.name, prompt_len = prompt.len(), "Rendered prompt");

        let request = GenerateRequest::builder()
            .prompt(prompt)
            .model(self.settings.model.clone())
            .temperature(self.settings.temperature)
            .max_tokens(self.settings.max_tokens)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))?;

        let response = self.driver.generate(&request).await.map_err(|e| {
            error!(stage = %self.name, error = %e, "Model call failed");
            GenerationError::new(self.name.as_str(), e)
        })?;

        let output = response.text().clone();
        if output.trim().is_empty() {
            error!(stage = %self.name, "Model returned empty output");
            return Err(ValidationError::new(ValidationErrorKind::EmptyOutput(
                self.name.clone(),
            ))
            .into());
        }

        let input = inputs.get(&self.primary_key).cloned().unwrap_or_default();
        self.history.record(input, output.as_str());
        info!(
            stage = %self.name,
            provider = self.driver.provider_name(),
            output_len = output.len(),
            "Stage complete"
        );
        Ok(output)
    }
}
