//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "rise-cli", "--"])
        .args(args)
        .env("RISE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_steps() {
    let (stdout, _stderr, code) = run_cli(&["steps"]);
    assert_eq!(code, 0, "steps failed");
    assert!(stdout.contains("Morning routine"));
    assert!(stdout.contains("Quick 20-Minute Workout"));
    assert!(stdout.contains("20:00"));
}

#[test]
fn test_steps_json() {
    let (stdout, _stderr, code) = run_cli(&["steps", "--json"]);
    assert_eq!(code, 0, "steps --json failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let rows = parsed.as_array().expect("expected array");
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["step"], "initial");
}

#[test]
fn test_config_list() {
    let (stdout, _stderr, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    assert!(parsed["streak"]["seed"].is_number());
}

#[test]
fn test_config_get() {
    let (stdout, _stderr, code) = run_cli(&["config", "get", "ui.clear_screen"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.trim() == "true" || stdout.trim() == "false");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_stdout, stderr, code) = run_cli(&["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_run_quick_session() {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "rise-cli", "--", "run"])
        .env("RISE_ENV", "dev")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .as_mut()
        .expect("no stdin")
        .write_all(b"tired\nbegin\nskip\ndone\ndone\ndone\ntidy\nfinish\nquit\n")
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("How did you sleep?"));
    assert!(stdout.contains("Morning Meditation"));
    assert!(stdout.contains("You're Ready!"));
    assert!(stdout.contains("day streak"));
}
