//! # Edit Command Module / 编辑命令模块
//!
//! This module implements the `edit` command: it opens the editor and writes
//! the resulting file contents to stdout, byte for byte.
//!
//! 此模块实现 `edit` 命令：打开编辑器并将结果文件内容逐字节写到 stdout。

use anyhow::{Context, Result};
use colored::*;
use std::io;
use std::path::PathBuf;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{config::EditorConfig, execution::edit_with_config, models::EditRequest},
    infra::t,
    reporting::write_outcome,
};

/// Arguments of the `edit` subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditArgs {
    pub path: Option<PathBuf>,
    pub contents: Option<String>,
    pub suffix: Option<String>,
    pub use_tty: Option<bool>,
}

impl EditArgs {
    pub fn into_request(self) -> EditRequest {
        EditRequest {
            path: self.path,
            contents: self.contents.map(String::into_bytes),
            use_tty: self.use_tty,
            suffix: self.suffix.unwrap_or_default(),
            editor: None,
        }
    }
}

/// Executes the edit command.
///
/// # Arguments
/// * `args` - Parsed command-line arguments
/// * `config` - Loaded configuration
pub async fn execute(args: EditArgs, config: &EditorConfig) -> Result<()> {
    let cancel = setup_signal_handler();
    let outcome = edit_with_config(args.into_request(), config, &cancel).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_outcome(&mut out, &outcome).context("Failed to write edited contents to stdout")?;
    Ok(())
}

/// Cancels the returned token on Ctrl-C so the editor can be shut down.
fn setup_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            eprintln!("\n{}", t!("edit.shutdown_signal").yellow());
            token_clone.cancel();
        }
    });

    token
}
