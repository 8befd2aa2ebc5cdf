use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Create a backend project tree with a virtual environment skeleton:
/// `<root>/backend/<venv_name>/bin/python` plus `pyvenv.cfg`.
pub fn create_backend(root: &Path, venv_name: &str) -> PathBuf {
    let backend = root.join("backend");
    let bin = backend.join(venv_name).join("bin");
    fs::create_dir_all(&bin).unwrap();

    fs::write(
        backend.join(venv_name).join("pyvenv.cfg"),
        "home = /usr/bin\ninclude-system-site-packages = false\nversion = 3.11.9\n",
    )
    .unwrap();
    write_executable(&bin.join("python"), "#!/bin/sh\nexit 0\n");

    backend
}

/// Install a stub lint tool into a venv bin directory. The stub answers
/// `--version` without side effects; a real lint invocation appends a line
/// to `marker` and exits with `exit_code`.
pub fn write_stub_linter(bin: &Path, name: &str, exit_code: i32, marker: &Path) {
    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then\n\
         \techo \"7.1.1 (mccabe: 0.7.0, pycodestyle: 2.12.1) CPython 3.11.9 on Linux\"\n\
         \texit 0\n\
         fi\n\
         echo run >> \"{}\"\n\
         exit {}\n",
        marker.display(),
        exit_code
    );
    write_executable(&bin.join(name), &script);
}

pub fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

pub fn invocation_count(marker: &Path) -> usize {
    fs::read_to_string(marker)
        .map(|s| s.lines().count())
        .unwrap_or(0)
}
