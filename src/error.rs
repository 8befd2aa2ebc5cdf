use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, LintRunnerError>;

/// Top-level error type for the lint runner
#[derive(Error, Debug)]
pub enum LintRunnerError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Lint(#[from] LintError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised before the lint tool is ever invoked: the target directory
/// or its virtual environment is missing or unusable.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("project directory not found: {path}")]
    ProjectDirNotFound { path: PathBuf },

    #[error("no virtual environment found under {project_dir} (searched: {searched})")]
    VenvNotFound {
        project_dir: PathBuf,
        searched: String,
    },

    #[error("virtual environment at {path} is not usable: {reason}")]
    VenvCorrupted { path: PathBuf, reason: String },

    #[error("python interpreter missing from virtual environment: {path}")]
    InterpreterMissing { path: PathBuf },
}

/// Errors around resolving and launching the lint tool itself. Lint
/// violations are not an error: they come back as a normal exit status.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("lint tool '{tool}' not found in the virtual environment or on PATH")]
    ToolNotFound { tool: String },

    #[error("failed to launch '{tool}': {reason}")]
    LaunchFailed { tool: String, reason: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to parse config: {0}")]
    ParsingFailed(String),
}
