//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the lectern binary.

mod commands;
mod config;
mod run;

pub use commands::{Cli, Commands};
pub use config::show_config;
pub use run::{RunOptions, run_pipeline};
