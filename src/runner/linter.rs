use crate::common::command_utils::is_command_available;
use crate::error::{LintError, Result};
use crate::runner::environment::VirtualEnv;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// A resolved lint tool, bound to the virtual environment it runs in.
pub struct Linter {
    tool: String,
    execution_path: Option<PathBuf>, // full path when resolved inside the venv
    venv: VirtualEnv,
}

impl Linter {
    /// Resolve the tool executable: the venv's scripts directory first, then
    /// a bare name on PATH.
    pub fn resolve(venv: VirtualEnv, tool: &str) -> Result<Self> {
        let candidate = venv.scripts_dir().join(tool);
        if candidate.is_file() {
            debug!("Resolved {} inside venv at {}", tool, candidate.display());
            return Ok(Self {
                tool: tool.to_string(),
                execution_path: Some(candidate),
                venv,
            });
        }

        #[cfg(windows)]
        {
            let candidate_exe = venv.scripts_dir().join(format!("{}.exe", tool));
            if candidate_exe.is_file() {
                debug!(
                    "Resolved {} inside venv at {}",
                    tool,
                    candidate_exe.display()
                );
                return Ok(Self {
                    tool: tool.to_string(),
                    execution_path: Some(candidate_exe),
                    venv,
                });
            }
        }

        if is_command_available(tool) {
            debug!("Resolved {} on PATH", tool);
            return Ok(Self {
                tool: tool.to_string(),
                execution_path: None,
                venv,
            });
        }

        Err(LintError::ToolNotFound {
            tool: tool.to_string(),
        }
        .into())
    }

    /// Best-effort version probe. Any failure yields `None`.
    pub fn version(&self) -> Option<String> {
        let output = self.base_command().arg("--version").output().ok()?;

        let text = if !output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            String::from_utf8_lossy(&output.stderr).into_owned()
        };

        let version = extract_version(&text);
        debug!("Version probe for {}: {:?}", self.tool, version);
        version
    }

    /// Run the tool against `project_dir` and return its raw exit status.
    ///
    /// Stdout and stderr are inherited: the tool's own output is the
    /// diagnostic, untouched.
    pub fn run(&self, project_dir: &Path, args: &[String]) -> Result<ExitStatus> {
        info!(
            "Running {} {} in {}",
            self.tool,
            args.join(" "),
            project_dir.display()
        );

        let status = self
            .base_command()
            .args(args)
            .current_dir(project_dir)
            .status()
            .map_err(|e| LintError::LaunchFailed {
                tool: self.tool.clone(),
                reason: e.to_string(),
            })?;

        Ok(status)
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    fn base_command(&self) -> Command {
        let mut cmd = match &self.execution_path {
            Some(path) => Command::new(path),
            None => Command::new(&self.tool),
        };
        self.venv.apply(&mut cmd);
        cmd
    }
}

/// Extract a version number using common patterns
fn extract_version(text: &str) -> Option<String> {
    use regex::Regex;

    let patterns = [r"\b(\d+\.\d+\.\d+(?:[+-][a-zA-Z0-9-.]+)?)\b", r"\b(\d+\.\d+)\b"];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern)
            && let Some(captures) = re.captures(text)
            && let Some(version) = captures.get(1)
        {
            return Some(version.as_str().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_flake8_style_version_line() {
        let text = "7.1.1 (mccabe: 0.7.0, pycodestyle: 2.12.1) CPython 3.11.9 on Linux";
        assert_eq!(extract_version(text), Some("7.1.1".to_string()));
    }

    #[test]
    fn falls_back_to_two_part_versions() {
        assert_eq!(extract_version("tool 1.2"), Some("1.2".to_string()));
        assert_eq!(extract_version("no digits here"), None);
    }
}
