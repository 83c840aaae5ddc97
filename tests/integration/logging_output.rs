//! Integration tests for log output selection.
//!
//! Logs go to stderr by default; file output and the RUNENV_LOG* overrides
//! are checked against the built binary.

use super::test_utils::{run_runenv, stdout};
use tempfile::TempDir;

#[test]
fn test_log_file_flag_writes_to_file() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    std::fs::create_dir_all(&ws).unwrap();
    let log_file = temp.path().join("logs").join("runenv.log");
    let log_arg = log_file.to_str().unwrap();

    let output = run_runenv(
        &home,
        &ws,
        &[
            "--log-output",
            "file",
            "--log-file",
            log_arg,
            "--log-level",
            "info",
            "resolve",
            "REACT_APP_API_BASE_URL",
        ],
        &[],
    );

    assert!(
        output.status.success(),
        "resolve failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "undefined");
    assert!(log_file.exists(), "log file should be created at {:?}", log_file);
    let logs = std::fs::read_to_string(&log_file).unwrap();
    assert!(logs.contains("runenv starting"), "unexpected log content: {}", logs);
    assert!(
        !String::from_utf8_lossy(&output.stderr).contains("runenv starting"),
        "file output should keep stderr clean"
    );
}

#[test]
fn test_env_overrides_select_json_file_output() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    std::fs::create_dir_all(&ws).unwrap();
    let log_file = temp.path().join("runenv.log");
    let log_arg = log_file.to_str().unwrap();

    let output = run_runenv(
        &home,
        &ws,
        &["--log-file", log_arg, "resolve", "REACT_APP_API_BASE_URL"],
        &[
            ("RUNENV_LOG_OUTPUT", "file"),
            ("RUNENV_LOG", "debug"),
            ("RUNENV_LOG_FORMAT", "json"),
        ],
    );

    assert!(
        output.status.success(),
        "resolve failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout(&output), "undefined");

    let logs = std::fs::read_to_string(&log_file).unwrap();
    let lines: Vec<serde_json::Value> = logs
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(!lines.is_empty());
    assert!(lines
        .iter()
        .all(|line| line["level"].is_string() && line["fields"].is_object()));
    assert!(
        lines
            .iter()
            .any(|line| line["fields"]["message"] == "Loaded env script"),
        "debug events should be logged: {}",
        logs
    );
}

#[test]
fn test_default_output_keeps_stdout_clean() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    std::fs::create_dir_all(&ws).unwrap();

    let output = run_runenv(
        &home,
        &ws,
        &["resolve", "REACT_APP_API_BASE_URL"],
        &[("RUNENV_LOG", "debug")],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "undefined");
    assert!(String::from_utf8_lossy(&output.stderr).contains("runenv starting"));
}
