//! # Edit Session Module / 编辑会话模块
//!
//! Runs a complete edit session: resolve the editor, prepare the file,
//! launch the editor in the foreground and read the result back.
//!
//! 执行完整的编辑会话：确定编辑器、准备文件、在前台启动编辑器并读回结果。

use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config::EditorConfig,
        editor::{EditorResolver, ExecutableLocator},
        error::Result,
        models::{EditOutcome, EditRequest},
        planner::build_invocation,
    },
    infra::{command, command::SystemLocator, fs},
};

/// Opens the editor described by `request` and returns the file's contents
/// after the editor exits. Uses the default configuration and never times out.
///
/// # Examples
/// ```no_run
/// # async fn demo() -> Result<(), editor_launch::core::EditorError> {
/// use editor_launch::core::{edit, EditRequest};
///
/// let message = edit(EditRequest::new().contents("# Describe your change\n").suffix(".md")).await?;
/// println!("{}", String::from_utf8_lossy(&message));
/// # Ok(())
/// # }
/// ```
pub async fn edit(request: EditRequest) -> Result<Vec<u8>> {
    let outcome =
        edit_with_config(request, &EditorConfig::default(), &CancellationToken::new()).await?;
    Ok(outcome.contents)
}

/// Like [`edit`], applying `config` and stopping the editor when `cancel` fires.
pub async fn edit_with_config(
    request: EditRequest,
    config: &EditorConfig,
    cancel: &CancellationToken,
) -> Result<EditOutcome> {
    edit_with(request, config, &SystemLocator::from_env(), cancel).await
}

/// Full edit session with an explicit executable locator.
///
/// Request fields take precedence over `config`, which takes precedence over
/// detection. A temporary file, if one is created, is removed before returning.
///
/// 完整的编辑会话。请求字段优先于配置，配置优先于自动检测。
/// 若创建了临时文件，返回前会被删除。
pub async fn edit_with(
    request: EditRequest,
    config: &EditorConfig,
    locator: &dyn ExecutableLocator,
    cancel: &CancellationToken,
) -> Result<EditOutcome> {
    let command = match request.editor {
        Some(ref command) => command.clone(),
        None => EditorResolver::from_config(config).resolve(locator)?,
    };

    let use_tty = request
        .use_tty
        .or(config.use_tty)
        .unwrap_or_else(fs::detect_use_tty);

    let suffix = if request.suffix.is_empty() {
        config.suffix.as_str()
    } else {
        request.suffix.as_str()
    };

    // Kept alive until the contents have been read back.
    let mut temp_file = None;
    let path: PathBuf = match request.path {
        Some(path) => path,
        None => {
            let temp = fs::create_temp_file(suffix)?;
            let path = temp.to_path_buf();
            temp_file = Some(temp);
            path
        }
    };

    let invocation = build_invocation(&command, &path, &config.editor_args, locator)?;

    if let Some(contents) = &request.contents {
        fs::write_contents(&path, contents)?;
    }

    let terminal = use_tty.then(|| {
        config
            .tty
            .clone()
            .unwrap_or_else(|| PathBuf::from(fs::tty_filename()))
    });

    tracing::debug!(command = %invocation, ?terminal, "launching editor");
    let timeout = config.timeout_secs.map(Duration::from_secs);
    let started = Instant::now();
    let exit_code = command::spawn_editor(&invocation, terminal.as_deref(), timeout, cancel).await?;
    let duration = started.elapsed();

    if exit_code != Some(0) {
        tracing::warn!(editor = %invocation.editor_name, ?exit_code, "editor exited unsuccessfully");
    }

    let contents = fs::read_contents(&path)?;
    tracing::info!(bytes = contents.len(), elapsed = ?duration, "edit finished");
    drop(temp_file);

    Ok(EditOutcome {
        path,
        contents,
        exit_code,
        duration,
    })
}
