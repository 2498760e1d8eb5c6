//! # Configuration Module / 配置模块
//!
//! Optional TOML configuration for editor discovery and invocation.
//! Every field has a default, so an empty file is a valid configuration.
//!
//! 编辑器发现与调用的可选 TOML 配置。所有字段都有默认值，空文件也是合法配置。

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{EditorError, Result};

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "editor-launch.toml";

/// Template written by the `init` command. Must stay parseable by [`EditorConfig`].
pub const DEFAULT_CONFIG: &str = r#"# editor-launch configuration / editor-launch 配置

# Language for messages, e.g. "en" or "zh-CN". Defaults to the system locale.
# 消息语言，例如 "en" 或 "zh-CN"。默认使用系统语言。
# language = "en"

# Editor command to use instead of $VISUAL / $EDITOR. May include flags.
# 用于替代 $VISUAL / $EDITOR 的编辑器命令，可以包含参数。
# editor = "emacsclient -c"

# Fallback editors searched on PATH, in order.
# 在 PATH 中按顺序查找的后备编辑器。
candidates = ["editor", "vim", "emacs", "nano"]

# Suffix for temporary files, useful for syntax highlighting.
# 临时文件后缀，便于语法高亮。
suffix = ""

# Force (true) or disable (false) sending the editor's output to the terminal.
# 强制 (true) 或禁用 (false) 将编辑器输出发送到终端。
# use_tty = true

# Terminal device used when the output goes to the terminal.
# 输出发送到终端时使用的终端设备。
# tty = "/dev/tty"

# Kill the editor after this many seconds. / 超过该秒数后终止编辑器。
# timeout_secs = 3600

# Extra flags per editor name, replacing the built-in ones.
# 按编辑器名称指定的额外参数，会替换内置参数。
[editor_args]
# micro = []
# subl = ["-w"]
"#;

/// User configuration loaded from TOML.
/// 从 TOML 加载的用户配置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Message language; the system locale is used when absent.
    #[serde(default)]
    pub language: Option<String>,
    /// Editor command taking precedence over `$VISUAL` and `$EDITOR`.
    #[serde(default)]
    pub editor: Option<String>,
    /// Fallback candidates. Empty means the built-in list.
    #[serde(default)]
    pub candidates: Vec<String>,
    /// Suffix for temporary files.
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub use_tty: Option<bool>,
    /// Terminal device receiving the editor's output. Defaults to the
    /// platform's controlling terminal.
    #[serde(default)]
    pub tty: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Per-editor flag overrides keyed by executable name.
    #[serde(default)]
    pub editor_args: BTreeMap<String, Vec<String>>,
}

impl EditorConfig {
    /// Parses a configuration from TOML text. `path` is only used in errors.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| EditorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Loads the configuration at `path`.
pub fn load_config(path: &Path) -> Result<EditorConfig> {
    let content = fs::read_to_string(path).map_err(|e| EditorError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    EditorConfig::from_toml(&content, path)
}

/// Loads `path` when given, otherwise [`DEFAULT_CONFIG_FILE`] if it exists,
/// otherwise the default configuration.
///
/// 指定路径时加载该文件；否则若存在默认文件则加载之；再否则返回默认配置。
pub fn load_config_or_default(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                load_config(fallback)
            } else {
                Ok(EditorConfig::default())
            }
        }
    }
}
