//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a commented
//! default configuration file.
//!
//! 此模块实现了 `init` 命令，用于写入带注释的默认配置文件。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::Path};

use crate::{core::config::DEFAULT_CONFIG, infra::t};

/// Executes the init command.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file
pub fn execute(output: &Path, force: bool) -> Result<()> {
    // Check if file already exists
    if output.exists() && !force {
        eprintln!("{}", t!("init.file_exists", path = output.display()).red());
        eprintln!("{}", t!("init.use_force").yellow());
        anyhow::bail!(t!("init.file_exists", path = output.display()).to_string());
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", path = parent.display()).to_string()
            })?;
        }
    }

    fs::write(output, DEFAULT_CONFIG)
        .with_context(|| t!("init.write_failed", path = output.display()).to_string())?;

    println!("{}", t!("init.success", path = output.display()).green());
    println!("{}", t!("init.next_steps"));

    Ok(())
}
