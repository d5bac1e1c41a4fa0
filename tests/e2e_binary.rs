//! E2E tests for the `vfs` binary.
//!
//! Spawns the built executable with piped stdin and a throwaway config,
//! then checks both output streams and the exit status.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const GREETING: &str =
    "\nWelcome to Virtual File System!\nType 'help' to get details and 'exit' to leave.\n";

/// Write a config whose log file is `log_file`, returning the config path.
fn write_config(dir: &Path, log_file: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let content = format!(
        "[logging]\nlevel = \"info\"\nfile = '{}'\n",
        log_file.display()
    );
    std::fs::write(&path, content).unwrap();
    path
}

/// Run the binary with `args` after `--config <config>`, feeding `input`.
fn run_vfs(dir: &Path, config: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_vfs"))
        .arg("--config")
        .arg(config)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("VFS_LOG_LEVEL")
        .env_remove("VFS_TIMEZONE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn vfs");

    // Dropping stdin closes it, so input without `exit` ends at EOF.
    let mut stdin = child.stdin.take().unwrap();
    // The child may exit without reading stdin (e.g. `--help`), so a
    // broken pipe here is expected and not an error.
    if let Err(e) = stdin.write_all(input.as_bytes()) {
        assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe, "{e}");
    }
    drop(stdin);

    child.wait_with_output().unwrap()
}

fn run_session(input: &str) -> (TempDir, Output) {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &dir.path().join("vfs.log"));
    let output = run_vfs(dir.path(), &config, &[], input);
    (dir, output)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_greeting_prompt_and_exit() {
    let (_dir, output) = run_session("register u\nexit\n");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{GREETING}$ Add u successfully.\n$ See you.\n")
    );
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let (_dir, output) = run_session("register u\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{GREETING}$ Add u successfully.\n$ "));
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_empty_input_exits_cleanly() {
    let (_dir, output) = run_session("");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("{GREETING}$ "));
}

#[test]
fn test_lines_after_exit_are_ignored() {
    let (_dir, output) = run_session("exit\nregister u\n");

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{GREETING}$ See you.\n"));
}

#[test]
fn test_errors_go_to_stderr() {
    let (_dir, output) = run_session("register u$er\nregister u\nregister u\nfrobnicate\nexit\n");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{GREETING}$ $ Add u successfully.\n$ $ $ See you.\n")
    );
    assert_eq!(
        stderr(&output),
        "Error: The u$er contain invalid chars.\n\
         Error: The u has already existed.\n\
         Unrecognized command.\n"
    );
}

#[test]
fn test_help_flag_prints_help_and_exits() {
    for flag in ["-h", "--help"] {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), &dir.path().join("vfs.log"));
        let output = run_vfs(dir.path(), &config, &[flag], "register u\n");

        assert!(output.status.success(), "{flag} failed");
        let out = stdout(&output);
        assert!(out.starts_with("=== Virtual File System ==="), "{flag}: {out}");
        assert!(out.contains("list-files <username> <foldername>"));
        assert!(!out.contains("Welcome"));
        assert!(!out.contains("Add u successfully."));
        assert_eq!(stderr(&output), "");
    }
}

#[test]
fn test_help_command_in_session() {
    let (_dir, output) = run_session("help\nexit\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with(&format!("{GREETING}$ === Virtual File System ===")));
    assert!(out.ends_with("$ See you.\n"));
}

#[test]
fn test_session_writes_log_file() {
    let (dir, output) = run_session("register u\nexit\n");

    assert!(output.status.success());
    let log = std::fs::read_to_string(dir.path().join("vfs.log")).unwrap();
    assert!(log.contains("registered user"));
    assert!(!log.contains('\x1b'));
}

#[test]
fn test_rename_collision_with_logging_fallback() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as the log file, forcing the stderr fallback.
    let config = write_config(dir.path(), dir.path());
    let input = "register u\n\
                 create-folder u a\n\
                 create-folder u b\n\
                 rename-folder u a b\n\
                 list-folders u\n\
                 exit\n";
    let output = run_vfs(dir.path(), &config, &[], input);

    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Rename a to b successfully.\n"));
    let listed: Vec<&str> = out
        .lines()
        .filter_map(|l| l.strip_prefix("$ "))
        .filter(|l| l.starts_with("b "))
        .collect();
    assert_eq!(listed.len(), 1, "stdout: {out}");
    assert!(listed[0].ends_with(" u"));

    let err = stderr(&output);
    let mut lines = err.lines();
    assert!(
        lines
            .next()
            .is_some_and(|l| l.starts_with("Failed to initialize logging")),
        "stderr: {err}"
    );
    assert_eq!(lines.next(), None, "stderr: {err}");
    assert!(!err.contains("rename replaced"));
    assert!(!err.contains('\x1b'));
}
