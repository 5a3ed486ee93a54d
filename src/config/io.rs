use super::Config;
use crate::error::{Result, ScanMergeError};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "scanmerge.toml";

/// Parses toml content into a config, applying defaults for absent keys.
///
/// # Errors
/// Returns `ScanMergeError::Config` on malformed toml or unknown value types.
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

/// Reads and parses `path`.
///
/// # Errors
/// Returns error if the file is missing, unreadable or malformed.
pub fn load_toml_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| ScanMergeError::io(e, path))?;
    parse_toml(&content)
}
