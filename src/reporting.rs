//! # Reporting Module / 报告模块
//!
//! This module handles what the command-line interface prints: resolved
//! editors, edited contents and errors, with internationalization support.
//!
//! 此模块处理命令行界面的输出：解析出的编辑器、编辑后的内容和错误，支持国际化。

pub mod console;

// Re-export common reporting functions
pub use console::{print_editor, print_error, write_outcome};
