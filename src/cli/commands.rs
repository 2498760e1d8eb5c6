//! # Commands Module / 命令模块
//!
//! One module per subcommand of the `editor-launch` CLI.
//!
//! `editor-launch` CLI 的每个子命令对应一个模块。

pub mod edit;
pub mod get_editor;
pub mod init;
