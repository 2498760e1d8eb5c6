//! # Console Reporting Module / 控制台报告模块
//!
//! Output of the command-line interface. Results go to stdout so they can be
//! captured by scripts; status messages go to stderr.
//!
//! 命令行界面的输出。结果写到 stdout 以便脚本捕获；状态消息写到 stderr。

use colored::*;
use std::io::{self, Write};

use crate::core::models::EditOutcome;
use crate::infra::t;

/// Prints the resolved editor command on its own line.
pub fn print_editor(command: &str) {
    println!("{}", command);
}

/// Writes the edited contents to `out` unchanged, then reports an
/// unsuccessful editor exit on stderr.
///
/// 将编辑后的内容原样写入 `out`，若编辑器退出失败则在 stderr 报告。
pub fn write_outcome(out: &mut impl Write, outcome: &EditOutcome) -> io::Result<()> {
    out.write_all(&outcome.contents)?;
    out.flush()?;

    match outcome.exit_code {
        Some(0) => {}
        Some(code) => eprintln!("{}", t!("edit.nonzero_exit", code = code).yellow()),
        None => eprintln!("{}", t!("edit.killed").yellow()),
    }
    Ok(())
}

/// Prints a top-level error and its causes.
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn contents_are_written_verbatim() {
        let outcome = EditOutcome {
            path: PathBuf::from("/tmp/x"),
            contents: vec![0xff, b'a', b'\n'],
            exit_code: Some(0),
            duration: Duration::from_millis(5),
        };
        let mut buf = Vec::new();
        write_outcome(&mut buf, &outcome).unwrap();
        assert_eq!(buf, vec![0xff, b'a', b'\n']);
    }
}
