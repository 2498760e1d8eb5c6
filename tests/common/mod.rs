// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Creates an executable shell script named `name` in `dir` with `body`.
/// `$last` holds the file being edited.
#[cfg(unix)]
pub fn write_fake_editor(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    let script = format!("#!/bin/sh\nfor last; do :; done\n{body}\n");
    fs::write(&path, script).expect("Failed to write fake editor");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake editor executable");
    path
}

/// A fake editor that appends ` edited` to the file and exits successfully.
#[cfg(unix)]
pub fn appending_editor(dir: &Path) -> PathBuf {
    write_fake_editor(dir, "fake-editor", r#"printf ' edited' >> "$last""#)
}

/// A fake editor that records its arguments, one per line, in `args.log` next to itself.
#[cfg(unix)]
pub fn recording_editor(dir: &Path) -> PathBuf {
    let log = dir.join("args.log");
    let body = format!(r#"printf '%s\n' "$@" > '{}'"#, log.display());
    write_fake_editor(dir, "recording-editor", &body)
}

/// Reads the argument log written by [`recording_editor`].
pub fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.log"))
        .expect("Fake editor did not record its arguments")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Quotes a path so it survives editor command splitting.
pub fn command_for(path: &Path) -> String {
    shlex::try_quote(&path.to_string_lossy())
        .expect("Path contains a nul byte")
        .into_owned()
}

pub fn setup_test_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}
