//! # Editor Discovery Module / 编辑器发现模块
//!
//! Decides which editor to run and which extra flags it needs to block in
//! the foreground until the file is closed.
//!
//! 决定运行哪个编辑器，以及它需要哪些额外参数才能在前台阻塞直到文件关闭。

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use crate::core::config::EditorConfig;
use crate::core::error::{EditorError, Result};
use crate::infra::command::SystemLocator;

const DEFAULT_EDITORS: &[&str] = &["editor", "vim", "emacs", "nano"];

/// Fallback editors searched on `PATH` when the environment names none.
pub fn default_editors() -> &'static [&'static str] {
    DEFAULT_EDITORS
}

/// Built-in flags for well-known editors, keyed by executable name.
///
/// # Examples
/// ```
/// use editor_launch::core::editor::editor_args;
/// assert_eq!(editor_args("vim"), vec!["-f", "-o"]);
/// assert!(editor_args("ed").is_empty());
/// ```
pub fn editor_args(name: &str) -> Vec<String> {
    let args: &[&str] = match name {
        "vim" | "gvim" | "vim.basic" | "vim.tiny" => &["-f", "-o"],
        "emacs" | "emacsclient" => &["-nw"],
        "gedit" => &["-w", "--new-window"],
        "nano" => &["-R"],
        "code" => &["-w", "-n"],
        _ => &[],
    };
    args.iter().map(|s| s.to_string()).collect()
}

/// Flags for `name`, preferring a configured override over the built-in table.
pub fn editor_args_with(name: &str, overrides: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    overrides
        .get(name)
        .cloned()
        .unwrap_or_else(|| editor_args(name))
}

/// Finds executables by name. Abstracted so discovery can be tested without
/// touching the real `PATH`.
pub trait ExecutableLocator {
    fn find_executable(&self, name: &str) -> Option<PathBuf>;
}

impl<F> ExecutableLocator for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// Inputs of editor discovery, captured up front.
/// 编辑器发现的输入，预先捕获。
#[derive(Debug, Clone, Default)]
pub struct EditorResolver {
    /// Explicit command from configuration; wins over the environment.
    pub configured: Option<String>,
    pub visual: Option<String>,
    pub editor: Option<String>,
    /// Fallback names. Empty means [`default_editors`].
    pub candidates: Vec<String>,
}

impl EditorResolver {
    /// Captures `$VISUAL` and `$EDITOR` from the process environment.
    pub fn from_env() -> Self {
        Self {
            configured: None,
            visual: env::var("VISUAL").ok(),
            editor: env::var("EDITOR").ok(),
            candidates: Vec::new(),
        }
    }

    /// Environment lookup plus the configured editor and candidates.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            configured: config.editor.clone(),
            candidates: config.candidates.clone(),
            ..Self::from_env()
        }
    }

    /// Returns the editor command to run.
    ///
    /// Order: configured command, `$VISUAL`, `$EDITOR`, then the first
    /// candidate found by `locator` (returned as its full path). Empty
    /// values are skipped.
    pub fn resolve(&self, locator: &dyn ExecutableLocator) -> Result<String> {
        let explicit = [&self.configured, &self.visual, &self.editor]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty());
        if let Some(command) = explicit {
            tracing::debug!(editor = %command, "using editor from configuration or environment");
            return Ok(command.clone());
        }

        let candidates: Vec<&str> = if self.candidates.is_empty() {
            default_editors().to_vec()
        } else {
            self.candidates.iter().map(String::as_str).collect()
        };

        for name in candidates {
            if let Some(path) = locator.find_executable(name) {
                tracing::debug!(candidate = name, path = %path.display(), "found fallback editor");
                return Ok(path.to_string_lossy().into_owned());
            }
            tracing::trace!(candidate = name, "fallback editor not on PATH");
        }

        Err(EditorError::NoEditorFound)
    }
}

/// Resolves the editor from the process environment using the system `PATH`.
pub fn get_editor() -> Result<String> {
    EditorResolver::from_env().resolve(&SystemLocator::from_env())
}

/// Like [`get_editor`], but the configured editor and candidates apply.
pub fn get_editor_with_config(config: &EditorConfig) -> Result<String> {
    EditorResolver::from_config(config).resolve(&SystemLocator::from_env())
}
