//! Lectern - research-grounded book titles and summary scripts.
//!
//! Lectern asks a language model for book titles about a topic, looks the
//! topic up on Wikipedia, and asks the model again for a summary script that
//! draws on both. Each stage remembers its earlier exchanges and feeds them
//! back into its next prompt.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lectern::{LecternConfig, build_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LecternConfig::load()?;
//!     let mut pipeline = build_pipeline(&config, "sk-...")?;
//!
//!     let run = pipeline.submit("space exploration").await?;
//!     for title in run.titles() {
//!         println!("{title}");
//!     }
//!     println!("{}", run.script());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export
//! - `api` - Enable tests that call the live OpenAI and Wikipedia APIs
//!
//! # Architecture
//!
//! - `lectern_error` - Error types
//! - `lectern_core` - Prompt templates, history, request types
//! - `lectern_interface` - `LanguageModel` and `ResearchSource` traits
//! - `lectern_models` - OpenAI and Wikipedia clients
//! - `lectern_pipeline` - Generation stages and the orchestrator
//!
//! This crate (`lectern`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{LecternConfig, ModelSettings, ResearchSettings, TemplateSettings};

pub use lectern_core::*;
pub use lectern_error::*;
pub use lectern_interface::*;
pub use lectern_pipeline::*;

pub use lectern_models::*;

#[cfg(feature = "observability")]
mod observability;

#[cfg(feature = "observability")]
pub use observability::{ObservabilityConfig, init_observability};

/// Pipeline wired to the OpenAI and Wikipedia clients.
pub type DefaultPipeline = PipelineOrchestrator<OpenAiClient, WikipediaClient>;

/// Build the default pipeline from a loaded configuration.
///
/// `api_key` is passed separately so the configuration can be loaded and
/// shown without one.
///
/// # Errors
///
/// Configuration, template or HTTP client construction errors.
pub fn build_pipeline(config: &LecternConfig, api_key: &str) -> LecternResult<DefaultPipeline> {
    let driver = OpenAiClient::with_options(
        api_key,
        config.model.name.as_str(),
        config.model.base_url.as_str(),
        config.model.timeout(),
    )?;
    let source = WikipediaClient::with_options(
        &config.research.language,
        config.research.top_k_results,
        config.research.max_chars,
        config.research.timeout(),
    )?;

    tracing::debug!(
        model = %config.model.name,
        base_url = %config.model.base_url,
        language = %config.research.language,
        "Building pipeline"
    );
    PipelineOrchestrator::new(config.pipeline_config()?, driver, source)
}
