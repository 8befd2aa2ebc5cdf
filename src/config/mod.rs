pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".backend-lint.toml";

/// Get the global config file path (~/.backend-lint.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.backend-lint.toml)
pub fn local_config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
///
/// An explicitly passed path is authoritative: any read or parse failure is
/// an error. Discovered files (local first, then global) are tolerant and
/// fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config =
            toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
        return Ok(config);
    }

    // Try local config first
    let local = local_config_path(Path::new("."));
    if local.exists() {
        if let Ok(content) = fs::read_to_string(&local) {
            if let Ok(config) = toml::from_str(&content) {
                return Ok(config);
            }
        }
    }

    // Try global config
    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Ok(content) = fs::read_to_string(&global) {
                if let Ok(config) = toml::from_str(&content) {
                    return Ok(config);
                }
            }
        }
    }

    Ok(types::Config::default())
}
