//! # Error Types / 错误类型
//!
//! The library reports failures through [`EditorError`]. The CLI layer wraps
//! these in `anyhow` with extra context.
//!
//! 库通过 [`EditorError`] 报告失败，CLI 层再用 `anyhow` 附加上下文。

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    /// Neither `$VISUAL`/`$EDITOR` nor any fallback candidate is usable.
    #[error("Unable to find a viable editor on this system. Please consider setting your $EDITOR variable")]
    NoEditorFound,

    #[error("Editor command is empty")]
    EmptyCommand,

    #[error("Failed to parse editor command: {command}")]
    InvalidCommand { command: String },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch editor '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor did not exit within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Edit was cancelled")]
    Cancelled,

    #[error("Failed to load config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl EditorError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        EditorError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
