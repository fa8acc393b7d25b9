//! CLI command definitions.

use clap::{Parser, Subcommand};
use lectern::ResearchPolicy;
use std::path::PathBuf;

/// Lectern - book titles and a research-grounded summary script for a topic
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(about = "Generate book titles and a research-grounded summary script for a topic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log lines to stderr as JSON objects
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate titles, fetch research and write a script for a topic
    Run {
        /// Topic to write about
        #[arg(long)]
        topic: String,

        /// Configuration file (defaults to lectern.toml lookup)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the completion model
        #[arg(long)]
        model: Option<String>,

        /// What to do when research is unavailable (abort, degrade)
        #[arg(long)]
        research_policy: Option<ResearchPolicy>,

        /// Print the run and both histories as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration with secrets masked
    Config {
        /// Configuration file (defaults to lectern.toml lookup)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_logs_is_global() {
        let cli =
            Cli::try_parse_from(["lectern", "run", "--topic", "owls", "--json-logs"]).unwrap();
        assert!(cli.json_logs);
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Run { json: false, .. }));
    }

    #[test]
    fn json_logs_defaults_off() {
        let cli = Cli::try_parse_from(["lectern", "config"]).unwrap();
        assert!(!cli.json_logs);
    }
}
