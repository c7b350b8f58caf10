//! Interactive-mode tests driving the numshell binary over piped stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn run_session(dir: &TempDir, input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_numshell"))
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn numshell");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait for numshell")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_banner_and_exit() {
    let dir = TempDir::new().unwrap();
    let output = run_session(&dir, "exit\n");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Welcome to the integer collection manager."));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let dir = TempDir::new().unwrap();
    let output = run_session(&dir, "frobnicate\nadd nope\nadd 2\ncount\nexit\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("no such command: frobnicate"));
    assert!(stdout.contains("cannot convert \"nope\" to integer"));
    // The session kept going after both errors.
    assert!(stdout.contains("1\n"));
}

#[test]
fn test_end_of_input_terminates_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = run_session(&dir, "add 1\n");

    assert!(output.status.success());
}

#[test]
fn test_missing_required_argument_message() {
    let dir = TempDir::new().unwrap();
    let output = run_session(&dir, "add\nexit\n");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("missing required argument 'value'"));
}

#[test]
fn test_find_reports_position_and_absence() {
    let dir = TempDir::new().unwrap();
    let output = run_session(&dir, "add 5\nadd 8\nfind 8\nfind 9\nexit\n");

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Value 8 found at position 1"));
    assert!(stdout.contains("Value 9 not found"));
}

#[test]
fn test_get_handles_empty_positions() {
    let dir = TempDir::new().unwrap();
    let output = run_session(&dir, "add 5\nget 0\nget 3\nexit\n");

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Position 0 holds the value 5"));
    assert!(stdout.contains("No value has been added at index 3 yet"));
}

#[test]
fn test_prompt_can_be_configured() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("numshell.toml"), "prompt = \"numshell> \"\n").unwrap();
    let output = run_session(&dir, "exit\n");

    assert!(stdout_of(&output).contains("numshell> "));
}

#[test]
fn test_unexpected_error_prints_generic_notice_interactively() {
    let dir = TempDir::new().unwrap();
    let output = run_session(&dir, "del 5\ncount\nexit\n");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("unexpected error"));
    // The loop recovered and ran the next command.
    assert!(stdout.contains("0\n"));

    let log = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
    assert!(log.contains("out of range"));
}
