//! Pipeline configuration.

use crate::{ResearchPolicy, TemplateSpec};
use lectern_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default sampling temperature for both stages.
const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Default completion length for both stages.
const DEFAULT_MAX_TOKENS: u32 = 256;

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> Option<u32> {
    Some(DEFAULT_MAX_TOKENS)
}

/// Settings shared by both generation stages plus the research policy and
/// template texts.
///
/// Everything a run depends on is passed in here; nothing is read from the
/// environment.
///
/// # Examples
///
/// ```
/// use lectern_pipeline::{PipelineConfig, ResearchPolicy};
///
/// let config = PipelineConfig::builder()
///     .model(Some("gpt-3.5-turbo-instruct".to_string()))
///     .research_policy(ResearchPolicy::Degrade)
///     .build()
///     .unwrap();
///
/// assert_eq!(*config.temperature(), 0.9);
/// assert_eq!(*config.max_tokens(), Some(256));
/// assert!(config.validate().is_ok());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PipelineConfig {
    /// Model identifier; the client's default when `None`
    #[builder(default)]
    #[serde(default)]
    model: Option<String>,
    /// Sampling temperature (0.0 to 2.0)
    #[builder(default = "default_temperature()")]
    #[serde(default = "default_temperature")]
    temperature: f32,
    /// Maximum tokens per completion
    #[builder(default = "default_max_tokens()")]
    #[serde(default = "default_max_tokens")]
    max_tokens: Option<u32>,
    /// Behaviour when research cannot be fetched
    #[builder(default)]
    #[serde(default)]
    research_policy: ResearchPolicy,
    /// Title-stage template
    #[builder(default = "TemplateSpec::default_title()")]
    #[serde(default = "TemplateSpec::default_title")]
    title_template: TemplateSpec,
    /// Script-stage template
    #[builder(default = "TemplateSpec::default_script()")]
    #[serde(default = "TemplateSpec::default_script")]
    script_template: TemplateSpec,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: default_max_tokens(),
            research_policy: ResearchPolicy::default(),
            title_template: TemplateSpec::default_title(),
            script_template: TemplateSpec::default_script(),
        }
    }
}

impl PipelineConfig {
    /// Create a new config builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the temperature is outside 0.0..=2.0, if
    /// `max_tokens` is zero, or if the model identifier is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == Some(0) {
            return Err(ConfigError::new("max_tokens must be greater than zero"));
        }
        if self.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            return Err(ConfigError::new("model identifier must not be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_temperature() {
        let config = PipelineConfig::builder().temperature(2.5_f32).build().unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("temperature"));
    }

    #[test]
    fn rejects_zero_max_tokens() {
        let config = PipelineConfig::builder()
            .max_tokens(Some(0_u32))
            .build()
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"research_policy":"degrade"}"#).unwrap();
        assert_eq!(*config.research_policy(), ResearchPolicy::Degrade);
        assert_eq!(config.title_template(), &TemplateSpec::default_title());
        assert_eq!(*config.temperature(), 0.9);
    }
}
