//! # Editor Launch Library / Editor Launch 库
//!
//! Programmatically open the user's text editor on a file and capture the
//! result once the editor exits.
//!
//! 以编程方式在文件上打开用户的文本编辑器，并在编辑器退出后获取结果。
//!
//! ## Modules / 模块
//!
//! - `core` - Editor discovery, invocation planning and edit sessions
//! - `infra` - Process execution, file system access and logging
//! - `reporting` - Console output for the command-line interface
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 编辑器发现、调用计划与编辑会话
//! - `infra` - 进程执行、文件系统访问与日志
//! - `reporting` - 命令行界面的控制台输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::{
    edit, edit_with_config, get_editor, get_editor_with_config, EditOutcome, EditRequest,
    EditorConfig, EditorError,
};

/// Picks the best available UI language for `requested`.
///
/// Tries the full locale (e.g. "zh-CN"), then the language part alone
/// (e.g. "en" from "en-US"), then falls back to "en".
pub fn select_locale(requested: &str) -> String {
    let available = rust_i18n::available_locales!();
    let is_available = |lang: &str| available.iter().any(|l| *l == lang);

    if is_available(requested) {
        return requested.to_string();
    }
    requested
        .split(['-', '_'])
        .next()
        .filter(|lang| is_available(lang))
        .unwrap_or("en")
        .to_string()
}


/// Initializes i18n from the system locale.
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    rust_i18n::set_locale(&select_locale(&locale));
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
