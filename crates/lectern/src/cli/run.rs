//! Pipeline execution command handler.

use super::config::load_config;
use lectern::{
    ConfigError, HistoryStore, LecternResult, PipelineRun, ResearchPolicy, build_pipeline,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment variable consulted when the configuration has no API key.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Command-line overrides for a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Model override
    pub model: Option<String>,
    /// Research policy override
    pub research_policy: Option<ResearchPolicy>,
    /// Emit JSON instead of text
    pub json: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    run: &'a PipelineRun,
    title_history: &'a HistoryStore,
    script_history: &'a HistoryStore,
}

fn resolve_api_key(configured: Option<&str>) -> LecternResult<String> {
    if let Some(key) = configured.filter(|key| !key.trim().is_empty()) {
        return Ok(key.to_string());
    }
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::new(format!(
            "No API key: set model.api_key in lectern.toml or {}",
            API_KEY_VAR
        ))
        .into()),
    }
}

/// Run the pipeline once for `topic` and print the result.
pub async fn run_pipeline(
    topic: &str,
    options: RunOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(options.config.as_deref())?;
    if let Some(model) = options.model {
        config.model.name = model;
    }
    if let Some(policy) = options.research_policy {
        config.research.policy = policy;
    }
    debug!(config = ?config.redacted(), "Effective configuration");

    let api_key = resolve_api_key(config.model.api_key.as_deref())?;
    let mut pipeline = build_pipeline(&config, &api_key)?;

    info!(topic, "Starting run");
    let run = pipeline.submit(topic).await?;

    if options.json {
        let report = RunReport {
            run: &run,
            title_history: pipeline.title_history(),
            script_history: pipeline.script_history(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Titles:");
    for (i, title) in run.titles().iter().enumerate() {
        println!("  {}. {}", i + 1, title);
    }
    println!();
    println!("Research:");
    if run.research().is_empty() {
        println!("  (none)");
    } else {
        println!("{}", run.research());
    }
    println!();
    println!("Script:");
    println!("{}", run.script().trim());
    println!();
    println!("Title history:");
    println!("{}", pipeline.title_history().render());
    println!();
    println!("Script history:");
    println!("{}", pipeline.script_history().render());

    Ok(())
}
