//! Configuration display command handler.

use lectern::{LecternConfig, LecternResult};
use std::path::Path;

/// Load configuration from `path`, or the layered defaults when `None`.
pub fn load_config(path: Option<&Path>) -> LecternResult<LecternConfig> {
    match path {
        Some(path) => LecternConfig::from_file(path),
        None => LecternConfig::load(),
    }
}

/// Print the effective configuration as TOML with the API key masked.
pub fn show_config(path: Option<&Path>) -> LecternResult<()> {
    let config = load_config(path)?;
    print!("{}", config.to_redacted_toml()?);
    Ok(())
}
