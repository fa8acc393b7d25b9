//! Research-grounded, two-stage generation pipeline.
//!
//! A run turns a topic into candidate book titles, looks the topic up in a
//! reference source, and turns the titles plus the research into a summary
//! script:
//!
//! ```text
//! topic ──► title stage ──► titles ──┐
//!   └────► research lookup ──────────┴──► script stage ──► script
//! ```
//!
//! Each [`GenerationStage`] binds a prompt template, a language model and its
//! own history store. The [`PipelineOrchestrator`] sequences the stages and
//! the [`ResearchLookup`], one awaited call at a time.
//!
//! # Example
//!
//! ```rust,ignore
//! use lectern_pipeline::{PipelineConfig, PipelineOrchestrator};
//! use lectern_models::{OpenAiClient, WikipediaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = OpenAiClient::new("sk-...", "gpt-3.5-turbo-instruct")?;
//! let mut pipeline =
//!     PipelineOrchestrator::new(PipelineConfig::default(), driver, WikipediaClient::new()?)?;
//!
//! let run = pipeline.submit("space exploration").await?;
//! println!("{}", run.script());
//! println!("{}", pipeline.title_history().render());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod orchestrator;
mod research;
mod stage;
mod templates;

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::PipelineError;
pub use orchestrator::{PipelineOrchestrator, PipelineRun, PipelineStage, RunState, split_titles};
pub use research::{ResearchLookup, ResearchPolicy};
pub use stage::{GenerationSettings, GenerationStage};
pub use templates::{
    SCRIPT_INPUT_KEY, SCRIPT_TEMPLATE, TITLE_INPUT_KEY, TITLE_TEMPLATE, TemplateSpec,
    WIKIPEDIA_RESEARCH_SLOT,
};
