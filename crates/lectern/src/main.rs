//! Lectern CLI binary.
//!
//! Prints titles, research and script for a topic, or the effective
//! configuration.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, RunOptions, run_pipeline, show_config};

    // Load .env before anything reads OPENAI_API_KEY
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    #[cfg(feature = "observability")]
    lectern::init_observability(
        lectern::ObservabilityConfig::default()
            .with_log_level(log_level.to_string().to_lowercase())
            .with_json_logs(cli.json_logs),
    )?;

    #[cfg(not(feature = "observability"))]
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_writer(std::io::stderr);
        if cli.json_logs {
            subscriber.json().init();
        } else {
            subscriber.init();
        }
    }

    match cli.command {
        Commands::Run {
            topic,
            config,
            model,
            research_policy,
            json,
        } => {
            let options = RunOptions {
                config,
                model,
                research_policy,
                json,
            };
            run_pipeline(&topic, options).await?;
        }

        Commands::Config { config } => {
            show_config(config.as_deref())?;
        }
    }

    Ok(())
}
