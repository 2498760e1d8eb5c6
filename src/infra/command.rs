//! # Command Execution Module / 命令执行模块
//!
//! Locates executables on `PATH` and runs the editor process in the
//! foreground, honouring timeouts and cancellation.
//!
//! 在 `PATH` 中查找可执行文件，并在前台运行编辑器进程，支持超时与取消。

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Child;
use tokio_util::sync::CancellationToken;

use crate::core::editor::ExecutableLocator;
use crate::core::error::{EditorError, Result};
use crate::core::models::EditorInvocation;
use crate::infra::fs::open_tty_at;

/// Looks executables up on a `PATH`-style search list.
/// 在类似 `PATH` 的搜索列表中查找可执行文件。
#[derive(Debug, Clone, Default)]
pub struct SystemLocator {
    search_path: Option<OsString>,
    /// Extensions tried on Windows, from `PATHEXT`.
    extensions: Vec<String>,
}

impl SystemLocator {
    pub fn from_env() -> Self {
        let extensions = if cfg!(windows) {
            env::var("PATHEXT")
                .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
                .split(';')
                .filter(|ext| !ext.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };
        Self {
            search_path: env::var_os("PATH"),
            extensions,
        }
    }

    /// Locator over an explicit search list, e.g. for tests.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            extensions: Vec::new(),
        }
    }

    fn candidates(&self, base: &Path) -> Vec<PathBuf> {
        let mut paths = vec![base.to_path_buf()];
        for ext in &self.extensions {
            let mut with_ext = base.as_os_str().to_owned();
            with_ext.push(ext);
            paths.push(PathBuf::from(with_ext));
        }
        paths
    }
}

impl ExecutableLocator for SystemLocator {
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let as_path = Path::new(name);
        if as_path.components().count() > 1 {
            return self.candidates(as_path).into_iter().find(|p| is_executable(p));
        }
        let search_path = self.search_path.as_ref()?;
        env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| self.candidates(&dir.join(name)))
            .find(|p| is_executable(p))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// How waiting for the editor ended.
enum Waited {
    Exited(std::io::Result<ExitStatus>),
    TimedOut(Duration),
    Cancelled,
}

/// Runs the planned editor and waits for it to exit.
///
/// stdin and stderr are inherited. With `tty`, stdout is that terminal device
/// instead of our own (possibly captured) stdout. The editor is
/// killed if `timeout` elapses or `cancel` fires first.
///
/// # Returns
/// The editor's exit code, `None` if it was terminated by a signal.
///
/// 运行规划好的编辑器并等待其退出；超时或取消时终止编辑器。
pub async fn spawn_editor(
    invocation: &EditorInvocation,
    tty: Option<&Path>,
    timeout: Option<Duration>,
    cancel: &CancellationToken,
) -> Result<Option<i32>> {
    let mut cmd = tokio::process::Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .arg(&invocation.file)
        .stdin(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    match tty {
        Some(path) => cmd.stdout(Stdio::from(open_tty_at(path)?)),
        None => cmd.stdout(Stdio::inherit()),
    };

    let mut child = cmd.spawn().map_err(|source| EditorError::Spawn {
        program: invocation.program.clone(),
        source,
    })?;
    tracing::info!(editor = %invocation.editor_name, pid = ?child.id(), "editor started");

    let waited = tokio::select! {
        biased;
        _ = cancel.cancelled() => Waited::Cancelled,
        _ = tokio::time::sleep(timeout.unwrap_or_default()), if timeout.is_some() => {
            Waited::TimedOut(timeout.unwrap_or_default())
        }
        status = child.wait() => Waited::Exited(status),
    };

    match waited {
        Waited::Exited(status) => {
            let status = status.map_err(|e| EditorError::io("Failed to wait for editor", e))?;
            Ok(status.code())
        }
        Waited::TimedOut(after) => {
            terminate(&mut child).await;
            Err(EditorError::Timeout(after))
        }
        Waited::Cancelled => {
            terminate(&mut child).await;
            Err(EditorError::Cancelled)
        }
    }
}

async fn terminate(child: &mut Child) {
    if let Err(e) = child.kill().await {
        tracing::warn!(error = %e, "failed to kill editor process");
    }
}
