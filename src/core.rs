//! # Core Module / 核心模块
//!
//! This module contains the core functionality of editor-launch:
//! data models, configuration, editor discovery, invocation planning and
//! the edit session itself.
//!
//! 此模块包含 editor-launch 的核心功能：
//! 数据模型、配置、编辑器发现、调用计划以及编辑会话本身。

pub mod config;
pub mod editor;
pub mod error;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::EditorConfig;
pub use editor::{get_editor, get_editor_with_config};
pub use error::EditorError;
pub use execution::{edit, edit_with_config};
pub use models::{EditOutcome, EditRequest};
