//! End-to-end tests driving the real binary with piped stdin.
//!
//! Each test gets its own temp HOME so state lands in an isolated
//! `.config/lectern/state.json`. Streak-mode prompts need a real tty for
//! raw-mode polling, so those paths are covered by the session-level tests;
//! everything here runs through the plain blocking-read path.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::NaiveDate;
use lectern_core::StateFile;

/// Run the binary with the given stdin script and return (stdout, exit code).
fn run_lectern(home: &Path, script: &str) -> (String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lectern"))
        .env("HOME", home)
        .env_remove("LECTERN_ENV")
        .env_remove("LECTERN_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lectern");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

fn state_path(home: &Path) -> PathBuf {
    home.join(".config").join("lectern").join("state.json")
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[test]
fn goal_met_session_exits_zero_and_persists_a_reset_record() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, code) = run_lectern(home.path(), "3\nc\nc\nc\n");

    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("Congrats"), "stdout: {stdout}");

    let saved = StateFile::at(state_path(home.path())).load(today());
    assert_eq!(saved.goal(), 0);
    assert_eq!(saved.completed(), 0);
    assert!(!saved.streak_mode());
}

#[test]
fn save_exit_persists_progress_and_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let (_, code) = run_lectern(home.path(), "5\nc\ne\n");
    assert_eq!(code, 0);

    let saved = StateFile::at(state_path(home.path())).load(today());
    assert_eq!((saved.goal(), saved.completed()), (5, 1));
    assert!(!saved.streak_mode());
}

#[test]
fn progress_survives_between_runs() {
    let home = tempfile::tempdir().unwrap();
    let (_, code) = run_lectern(home.path(), "5\nc\nc\ne\n");
    assert_eq!(code, 0);

    // Second run resumes at 2/5; one more completion, then exit.
    let (stdout, code) = run_lectern(home.path(), "c\ne\n");
    assert_eq!(code, 0, "stdout: {stdout}");

    let saved = StateFile::at(state_path(home.path())).load(today());
    assert_eq!((saved.goal(), saved.completed()), (5, 3));
}

#[test]
fn corrupt_state_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let path = state_path(home.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json at all").unwrap();

    // Defaults mean no goal, so the first prompt is goal entry.
    let (stdout, code) = run_lectern(home.path(), "2\nc\ne\n");
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("Enter amount of lectures"), "stdout: {stdout}");

    let saved = StateFile::at(path).load(today());
    assert_eq!((saved.goal(), saved.completed()), (2, 1));
}

#[test]
fn invalid_goal_input_reprompts_with_a_message() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, code) = run_lectern(home.path(), "abc\n0\n2\ne\n");
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("valid integer"), "stdout: {stdout}");
    assert!(stdout.contains("positive"), "stdout: {stdout}");

    let saved = StateFile::at(state_path(home.path())).load(today());
    assert_eq!(saved.goal(), 2);
}

#[test]
fn unrecognized_menu_token_lists_the_options() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, code) = run_lectern(home.path(), "3\nwhat\ne\n");
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(
        stdout.contains("Please enter a valid option"),
        "stdout: {stdout}"
    );
    // Streak is off, so only the turn-on toggle is offered.
    assert!(stdout.contains("tosm"), "stdout: {stdout}");
}

#[test]
fn version_flag_works() {
    let output = Command::new(env!("CARGO_BIN_EXE_lectern"))
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("lectern"));
}
