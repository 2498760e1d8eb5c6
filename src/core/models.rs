//! # Data Models Module / 数据模型模块
//!
//! Requests, planned invocations and outcomes of an edit session.
//!
//! 编辑会话的请求、调用计划与结果。

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Describes one edit session. All fields are optional; `EditRequest::default()`
/// edits an empty temporary file with the discovered editor.
///
/// 描述一次编辑会话。所有字段均可选；`EditRequest::default()` 会用发现的编辑器
/// 编辑一个空的临时文件。
#[derive(Debug, Clone, Default)]
pub struct EditRequest {
    /// File to edit. A temporary file is created when `None`.
    pub path: Option<PathBuf>,
    /// Initial contents, written to the file before the editor starts.
    pub contents: Option<Vec<u8>>,
    /// Redirect the editor's stdout to the terminal. Detected when `None`.
    pub use_tty: Option<bool>,
    /// Suffix of the temporary file, e.g. `.md`.
    pub suffix: String,
    /// Editor command overriding discovery. May contain flags.
    pub editor: Option<String>,
}

impl EditRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the initial contents. Text is stored as its UTF-8 bytes.
    pub fn contents(mut self, contents: impl Into<Vec<u8>>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    pub fn use_tty(mut self, use_tty: bool) -> Self {
        self.use_tty = Some(use_tty);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }
}

/// The fully planned editor process: program, arguments and target file.
/// 完整规划的编辑器进程：程序、参数与目标文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInvocation {
    pub program: String,
    /// Flags from the command line followed by the editor-specific flags.
    pub args: Vec<String>,
    /// Name used to look up editor-specific flags, e.g. `vim.basic`.
    pub editor_name: String,
    pub file: PathBuf,
}

impl EditorInvocation {
    /// Complete argument vector as passed to the OS, program first.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(OsString::from(&self.program));
        argv.extend(self.args.iter().map(OsString::from));
        argv.push(self.file.clone().into_os_string());
        argv
    }
}

impl fmt::Display for EditorInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .chain(std::iter::once(self.file.display().to_string()))
            .collect::<Vec<_>>();
        match shlex::try_join(words.iter().map(String::as_str)) {
            Ok(joined) => write!(f, "{joined}"),
            Err(_) => write!(f, "{}", words.join(" ")),
        }
    }
}

/// Result of a finished edit session.
/// 编辑会话完成后的结果。
#[derive(Debug, Clone)]
pub struct EditOutcome {
    /// File that was edited. For temporary files this path no longer exists.
    pub path: PathBuf,
    /// Contents of the file after the editor exited.
    pub contents: Vec<u8>,
    /// Exit code of the editor, `None` if it was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Time the editor was open.
    pub duration: Duration,
}

impl EditOutcome {
    pub fn editor_succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Contents as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.contents).into_owned()
    }
}
