use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub lint: LintConfig,
}

/// Project layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory the lint suite runs against
    #[serde(default = "default_backend_dir")]
    pub backend_dir: PathBuf,
    /// Candidate virtual environment directory names, checked in order
    #[serde(default = "default_venv_dirs")]
    pub venv_dirs: Vec<String>,
}

/// Lint tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Executable name of the lint tool
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Arguments passed to the tool; "." means the whole tree, recursively
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_backend_dir() -> PathBuf {
    PathBuf::from("backend")
}

fn default_venv_dirs() -> Vec<String> {
    vec!["venv".to_string(), ".venv".to_string(), "env".to_string()]
}

fn default_tool() -> String {
    "flake8".to_string()
}

fn default_args() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            backend_dir: default_backend_dir(),
            venv_dirs: default_venv_dirs(),
        }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            args: default_args(),
        }
    }
}
