//! # File System Operations Module / 文件系统操作模块
//!
//! Temporary files, the controlling terminal, and reading/writing the
//! edited file.
//!
//! 临时文件、控制终端以及被编辑文件的读写。

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

use crate::core::error::{EditorError, Result};

/// Path of the controlling terminal on `os` (an `std::env::consts::OS` value).
pub fn tty_filename_for(os: &str) -> &'static str {
    if os == "windows" { "CON:" } else { "/dev/tty" }
}

/// Path of the controlling terminal on the current platform.
pub fn tty_filename() -> &'static str {
    tty_filename_for(std::env::consts::OS)
}

/// Whether the editor's stdout should go to the terminal. True when input is
/// interactive but our own stdout is being captured, e.g. `$(editor-launch edit)`.
pub fn should_use_tty(stdin_is_tty: bool, stdout_is_tty: bool) -> bool {
    stdin_is_tty && !stdout_is_tty
}

/// [`should_use_tty`] for the real stdin and stdout.
pub fn detect_use_tty() -> bool {
    should_use_tty(
        std::io::stdin().is_terminal(),
        std::io::stdout().is_terminal(),
    )
}

/// Opens the terminal device at `path` for writing. The device must exist.
pub fn open_tty_at(path: &Path) -> Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| EditorError::io(format!("Failed to open terminal {}", path.display()), e))
}

/// Creates an empty temporary file ending in `suffix`.
/// The file is deleted when the returned handle is dropped.
///
/// 创建以 `suffix` 结尾的空临时文件，句柄被丢弃时文件随之删除。
pub fn create_temp_file(suffix: &str) -> Result<TempPath> {
    let file = tempfile::Builder::new()
        .prefix("editor_launch_")
        .suffix(suffix)
        .tempfile()
        .map_err(|e| EditorError::io("Failed to create temporary file", e))?;
    // Close our handle so editors that lock files (notably on Windows) can open it.
    Ok(file.into_temp_path())
}

/// Writes `contents` to `path`, replacing any existing contents.
pub fn write_contents(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents)
        .map_err(|e| EditorError::io(format!("Failed to write {}", path.display()), e))
}

pub fn read_contents(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| EditorError::io(format!("Failed to read {}", path.display()), e))
}

/// Canonical path with symlinks resolved, or `path` unchanged if it cannot be resolved.
pub fn real_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
