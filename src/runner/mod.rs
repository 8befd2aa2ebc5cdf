pub mod environment;
pub mod linter;

pub use environment::VirtualEnv;
pub use linter::Linter;

use crate::config::types::Config;
use crate::error::{EnvironmentError, Result};
use log::{debug, info};
use serde::Serialize;
use std::path::PathBuf;

/// Final outcome of a lint run
#[derive(Debug, Clone, Serialize)]
pub struct LintOutcome {
    pub tool: String,
    pub version: Option<String>,
    pub project_dir: PathBuf,
    /// Raw exit code reported by the tool
    pub status: i32,
    pub passed: bool,
}

/// Run the configured lint tool against the backend directory.
///
/// Sequential and fail-fast: resolve the directory, activate its virtual
/// environment, invoke the tool once, capture the status. Lint violations
/// are a normal outcome with `passed == false`, not an error.
pub fn run_lint(config: &Config) -> Result<LintOutcome> {
    let project_dir = &config.project.backend_dir;
    if !project_dir.is_dir() {
        return Err(EnvironmentError::ProjectDirNotFound {
            path: project_dir.clone(),
        }
        .into());
    }

    // The tool runs with its working directory set to the project dir, so a
    // relative backend path would invalidate every path derived from it.
    // Resolve once, up front; venv and tool paths inherit the absolute root.
    let project_dir = project_dir.canonicalize()?;

    let venv = VirtualEnv::discover(&project_dir, &config.project.venv_dirs)?;
    info!("Activated virtual environment at {}", venv.root().display());

    let linter = Linter::resolve(venv, &config.lint.tool)?;
    let version = linter.version();
    if let Some(v) = &version {
        debug!("{} version {}", linter.tool(), v);
    }

    let status = linter.run(&project_dir, &config.lint.args)?;

    // A signal-terminated tool has no code; treat it as a failed run.
    let code = status.code().unwrap_or(1);

    Ok(LintOutcome {
        tool: config.lint.tool.clone(),
        version,
        project_dir,
        status: code,
        passed: status.success(),
    })
}
