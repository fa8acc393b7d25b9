//! File-based configuration for the Lectern pipeline.
//!
//! The configuration system layers:
//! - Bundled defaults (include_str! from lectern.toml)
//! - User overrides (~/.config/lectern/lectern.toml, then ./lectern.toml)
//!
//! Environment variables are never consulted here; the binary decides where
//! a missing API key comes from.

use config::{Config, File, FileFormat};
use lectern_error::{ConfigError, LecternError, LecternResult};
use lectern_pipeline::{PipelineConfig, ResearchPolicy, TemplateSpec};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../lectern.toml");

/// Placeholder shown instead of a configured API key.
const REDACTED: &str = "<redacted>";

/// Language model connection and sampling settings.
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gpt-3.5-turbo-instruct"
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Completion model identifier
    pub name: String,
    /// API key; the CLI falls back to `OPENAI_API_KEY` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL of the completions API
    pub base_url: String,
    /// Sampling temperature (0.0 to 2.0)
    pub temperature: f32,
    /// Maximum tokens per completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: "gpt-3.5-turbo-instruct".to_string(),
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.9,
            max_tokens: Some(256),
            timeout_secs: 60,
        }
    }
}

impl ModelSettings {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Research source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchSettings {
    /// Wikipedia language edition (e.g., "en", "de")
    pub language: String,
    /// Number of search hits to summarize
    pub top_k_results: usize,
    /// Character cap on the combined summaries
    pub max_chars: usize,
    /// What a run does when research is unavailable
    pub policy: ResearchPolicy,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ResearchSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            top_k_results: 3,
            max_chars: 4000,
            policy: ResearchPolicy::Abort,
            timeout_secs: 30,
        }
    }
}

impl ResearchSettings {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Optional prompt overrides; built-in prompts are used when absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Title-stage template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TemplateSpec>,
    /// Script-stage template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<TemplateSpec>,
}

/// Complete Lectern configuration.
///
/// # Example
///
/// ```no_run
/// use lectern::LecternConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LecternConfig::load()?;
/// let pipeline_config = config.pipeline_config()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    /// Language model settings
    pub model: ModelSettings,
    /// Research source settings
    pub research: ResearchSettings,
    /// Prompt overrides
    pub templates: TemplateSettings,
}

fn build_error(e: config::ConfigError) -> LecternError {
    LecternError::from(ConfigError::new(format!(
        "Failed to build configuration: {}",
        e
    )))
}

fn parse_error(e: config::ConfigError) -> LecternError {
    LecternError::from(ConfigError::new(format!(
        "Failed to parse configuration: {}",
        e
    )))
}

impl LecternConfig {
    /// Load configuration from a single TOML file.
    ///
    /// Values missing from the file take their built-in defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LecternResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .build()
            .map_err(|e| {
                LecternError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(parse_error)
    }

    /// Load the bundled defaults only.
    pub fn bundled() -> LecternResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(build_error)?
            .try_deserialize()
            .map_err(parse_error)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (lectern.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/lectern/lectern.toml)
    /// 3. User config in current directory (./lectern.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> LecternResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/lectern/lectern.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("lectern").required(false));

        builder
            .build()
            .map_err(build_error)?
            .try_deserialize()
            .map_err(parse_error)
    }

    /// Pipeline settings derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the resulting settings are out of range.
    pub fn pipeline_config(&self) -> LecternResult<PipelineConfig> {
        let mut builder = PipelineConfig::builder();
        builder
            .model(Some(self.model.name.clone()))
            .temperature(self.model.temperature)
            .max_tokens(self.model.max_tokens)
            .research_policy(self.research.policy);
        if let Some(title) = &self.templates.title {
            builder.title_template(title.clone());
        }
        if let Some(script) = &self.templates.script {
            builder.script_template(script.clone());
        }

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid pipeline configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Copy of this configuration with the API key masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.model.api_key.is_some() {
            copy.model.api_key = Some(REDACTED.to_string());
        }
        copy
    }

    /// Render as TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> LecternResult<String> {
        toml::to_string_pretty(&self.redacted()).map_err(|e| {
            LecternError::from(ConfigError::new(format!(
                "Failed to serialize configuration: {}",
                e
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_code_defaults() {
        assert_eq!(LecternConfig::bundled().unwrap(), LecternConfig::default());
    }

    #[test]
    fn redaction_hides_key_only_when_present() {
        let mut config = LecternConfig::default();
        assert_eq!(config.redacted().model.api_key, None);

        config.model.api_key = Some("sk-secret".to_string());
        let shown = config.to_redacted_toml().unwrap();
        assert!(!shown.contains("sk-secret"));
        assert!(shown.contains(REDACTED));
    }
}
