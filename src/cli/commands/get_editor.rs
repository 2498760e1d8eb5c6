//! # Get-Editor Command Module / Get-Editor 命令模块
//!
//! Prints the editor command that `edit` would run.
//!
//! 输出 `edit` 将要运行的编辑器命令。

use anyhow::Result;

use crate::{
    core::{config::EditorConfig, editor::get_editor_with_config},
    reporting::print_editor,
};

pub fn execute(config: &EditorConfig) -> Result<()> {
    let command = get_editor_with_config(config)?;
    print_editor(&command);
    Ok(())
}
