//! # Invocation Planner Module / 调用计划模块
//!
//! Turns an editor command string and a target file into the exact
//! argument vector that will be executed.
//!
//! 将编辑器命令字符串和目标文件转换为最终执行的参数向量。

use std::collections::BTreeMap;
use std::path::Path;

use crate::core::editor::{editor_args_with, ExecutableLocator};
use crate::core::error::{EditorError, Result};
use crate::core::models::EditorInvocation;
use crate::infra::fs::real_path;

/// Splits an editor command with shell quoting rules.
/// A leading `~` in the program word is expanded to the home directory.
///
/// 按 shell 引号规则拆分编辑器命令；程序名开头的 `~` 会展开为主目录。
pub fn split_command(command: &str) -> Result<Vec<String>> {
    let mut words = shlex::split(command).ok_or_else(|| EditorError::InvalidCommand {
        command: command.to_string(),
    })?;
    match words.first_mut() {
        Some(program) => {
            *program = shellexpand::tilde(program.as_str()).into_owned();
            Ok(words)
        }
        None => Err(EditorError::EmptyCommand),
    }
}

/// Name used to pick editor-specific flags for `program`.
///
/// Bare names are looked up with `locator`; the result (or an explicit path)
/// has its symlinks resolved, so `/usr/bin/vi` linking to `vim.basic` is
/// treated as vim. When nothing resolves, the written file name is used.
pub fn editor_name(program: &str, locator: &dyn ExecutableLocator) -> String {
    let written = Path::new(program);
    let located = if written.components().count() > 1 {
        Some(written.to_path_buf())
    } else {
        locator.find_executable(program)
    };

    let resolved = located.map(|path| real_path(&path));
    resolved
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| written.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string())
}

/// Plans the editor process: `split(command) ++ editor flags ++ [file]`.
///
/// # Examples
/// ```
/// use editor_launch::core::planner::build_invocation;
/// use std::collections::BTreeMap;
/// use std::path::{Path, PathBuf};
///
/// let none = |_: &str| -> Option<PathBuf> { None };
/// let plan = build_invocation("emacsclient -c", Path::new("/tmp/test.txt"), &BTreeMap::new(), &none).unwrap();
/// assert_eq!(plan.program, "emacsclient");
/// assert_eq!(plan.args, vec!["-c", "-nw"]);
/// ```
pub fn build_invocation(
    command: &str,
    file: &Path,
    overrides: &BTreeMap<String, Vec<String>>,
    locator: &dyn ExecutableLocator,
) -> Result<EditorInvocation> {
    let mut words = split_command(command)?;
    let program = words.remove(0);
    let name = editor_name(&program, locator);
    words.extend(editor_args_with(&name, overrides));

    tracing::debug!(program = %program, editor = %name, args = ?words, "planned editor invocation");

    Ok(EditorInvocation {
        program,
        args: words,
        editor_name: name,
        file: file.to_path_buf(),
    })
}
