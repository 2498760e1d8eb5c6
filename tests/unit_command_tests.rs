//! # Command Module Unit Tests / Command 模块单元测试
//!
//! Tests for `SystemLocator` and `spawn_editor`.
//!
//! 测试 `SystemLocator` 与 `spawn_editor`。

mod common;

use editor_launch::core::editor::ExecutableLocator;
use editor_launch::core::models::EditorInvocation;
use editor_launch::core::EditorError;
use editor_launch::infra::command::{spawn_editor, SystemLocator};
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn shell(script: &str) -> EditorInvocation {
    EditorInvocation {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        editor_name: "sh".to_string(),
        file: PathBuf::from("unused"),
    }
}

#[cfg(unix)]
#[cfg(test)]
mod locator_tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_executable_in_search_path() {
        let dir = common::setup_test_dir();
        let editor = common::appending_editor(dir.path());

        let locator = SystemLocator::with_search_path(dir.path());
        assert_eq!(locator.find_executable("fake-editor"), Some(editor));
    }

    #[test]
    fn test_skips_non_executable_files() {
        let dir = common::setup_test_dir();
        fs::write(dir.path().join("notes"), "not a program").unwrap();

        let locator = SystemLocator::with_search_path(dir.path());
        assert_eq!(locator.find_executable("notes"), None);
    }

    #[test]
    fn test_first_directory_wins() {
        let first = common::setup_test_dir();
        let second = common::setup_test_dir();
        let expected = common::write_fake_editor(first.path(), "ed", "exit 0");
        common::write_fake_editor(second.path(), "ed", "exit 0");

        let search = std::env::join_paths([first.path(), second.path()]).unwrap();
        let locator = SystemLocator::with_search_path(search);
        assert_eq!(locator.find_executable("ed"), Some(expected));
    }

    #[test]
    fn test_empty_name_is_never_found() {
        let locator = SystemLocator::with_search_path("/bin:/usr/bin");
        assert_eq!(locator.find_executable(""), None);
    }
}

#[cfg(unix)]
#[cfg(test)]
mod spawn_editor_tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_exit_code_is_reported() {
        let cancel = CancellationToken::new();
        let code = spawn_editor(&shell("exit 3"), None, None, &cancel).await.unwrap();
        assert_eq!(code, Some(3));
    }

    #[tokio::test]
    async fn test_successful_editor() {
        let cancel = CancellationToken::new();
        let code = spawn_editor(&shell("exit 0"), None, Some(Duration::from_secs(10)), &cancel)
            .await
            .unwrap();
        assert_eq!(code, Some(0));
    }

    #[tokio::test]
    async fn test_stdout_goes_to_terminal_device() {
        let dir = tempfile::tempdir().unwrap();
        let terminal = dir.path().join("tty");
        fs::write(&terminal, "").unwrap();
        let cancel = CancellationToken::new();

        let code = spawn_editor(&shell("echo on the terminal"), Some(&terminal), None, &cancel)
            .await
            .unwrap();
        assert_eq!(code, Some(0));
        assert_eq!(fs::read_to_string(&terminal).unwrap(), "on the terminal\n");
    }

    #[tokio::test]
    async fn test_missing_terminal_device_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let terminal = dir.path().join("no-such-tty");
        let cancel = CancellationToken::new();

        let err = spawn_editor(&shell("exit 0"), Some(&terminal), None, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::Io { .. }));
        assert!(err.to_string().contains("no-such-tty"));
    }

    #[tokio::test]
    async fn test_missing_program_is_a_spawn_error() {
        let invocation = EditorInvocation {
            program: "this_editor_does_not_exist_12345".to_string(),
            args: vec![],
            editor_name: "this_editor_does_not_exist_12345".to_string(),
            file: PathBuf::from("unused"),
        };
        let cancel = CancellationToken::new();

        let err = spawn_editor(&invocation, None, None, &cancel).await.unwrap_err();
        assert!(matches!(err, EditorError::Spawn { .. }));
        assert!(err.to_string().contains("this_editor_does_not_exist_12345"));
    }

    #[tokio::test]
    async fn test_timeout_kills_editor() {
        let cancel = CancellationToken::new();
        let err = spawn_editor(
            &shell("sleep 30"),
            None,
            Some(Duration::from_millis(100)),
            &cancel,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, EditorError::Timeout(d) if d == Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_cancellation_kills_editor() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = spawn_editor(&shell("sleep 30"), None, None, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::Cancelled));
    }
}
