use crate::error::{EnvironmentError, Result};
use log::{debug, info};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A discovered project-scoped Python virtual environment.
///
/// Activation never mutates the parent process: the environment is expressed
/// as variables for the child process that runs inside the venv.
#[derive(Debug, Clone)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    /// Find a usable virtual environment under `project_dir`.
    ///
    /// Candidate directory names are checked in order; the first one that
    /// exists wins and must validate. A present-but-broken environment is a
    /// hard error rather than a reason to keep searching.
    pub fn discover(project_dir: &Path, candidates: &[String]) -> Result<Self> {
        for name in candidates {
            let root = project_dir.join(name);
            if !root.is_dir() {
                continue;
            }
            debug!("Checking virtual environment candidate: {}", root.display());
            Self::validate(&root)?;
            info!("Found virtual environment at {}", root.display());
            return Ok(Self { root });
        }

        Err(EnvironmentError::VenvNotFound {
            project_dir: project_dir.to_path_buf(),
            searched: candidates.join(", "),
        }
        .into())
    }

    fn validate(root: &Path) -> std::result::Result<(), EnvironmentError> {
        if !root.join("pyvenv.cfg").is_file() {
            return Err(EnvironmentError::VenvCorrupted {
                path: root.to_path_buf(),
                reason: "missing pyvenv.cfg".to_string(),
            });
        }

        let interpreter = scripts_dir_of(root).join(python_exe_name());
        if !interpreter.is_file() {
            return Err(EnvironmentError::InterpreterMissing { path: interpreter });
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's executables (`bin` on Unix,
    /// `Scripts` on Windows).
    pub fn scripts_dir(&self) -> PathBuf {
        scripts_dir_of(&self.root)
    }

    /// Build the child-process variables equivalent to `source activate`:
    /// the scripts directory is prepended to PATH and VIRTUAL_ENV points at
    /// the environment root.
    pub fn activation_env(&self) -> Vec<(OsString, OsString)> {
        let scripts = self.scripts_dir();

        let current_path = env::var_os("PATH").unwrap_or_default();
        let mut search_path = vec![scripts.clone()];
        search_path.extend(env::split_paths(&current_path));
        let joined = env::join_paths(search_path).unwrap_or(current_path);

        vec![
            (OsString::from("PATH"), joined),
            (
                OsString::from("VIRTUAL_ENV"),
                self.root.clone().into_os_string(),
            ),
        ]
    }

    /// Apply the activation environment to a command. PYTHONHOME would
    /// override the venv's interpreter resolution, so it is dropped.
    pub fn apply(&self, cmd: &mut Command) {
        cmd.envs(self.activation_env());
        cmd.env_remove("PYTHONHOME");
    }
}

fn scripts_dir_of(root: &Path) -> PathBuf {
    if cfg!(windows) {
        root.join("Scripts")
    } else {
        root.join("bin")
    }
}

fn python_exe_name() -> &'static str {
    if cfg!(windows) { "python.exe" } else { "python" }
}
