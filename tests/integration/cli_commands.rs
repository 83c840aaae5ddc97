//! End-to-end CLI tests against the built binary.

use super::test_utils::{run_runenv, stdout, write_file};
use tempfile::TempDir;

#[test]
fn test_inject_then_resolve() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(&ws.join(".env"), "REACT_APP_API_BASE_URL=http://localhost:8080\n");

    let output = run_runenv(
        &home,
        &ws,
        &["inject"],
        &[("REACT_APP_API_BASE_URL", "https://api.example.com")],
    );
    assert!(
        output.status.success(),
        "inject failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("Overridden from environment: REACT_APP_API_BASE_URL"));
    assert!(ws.join("public/env-config.js").exists());

    let output = run_runenv(&home, &ws, &["resolve", "REACT_APP_API_BASE_URL"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "https://api.example.com");
}

#[test]
fn test_resolve_without_injection_prints_marker() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    std::fs::create_dir_all(&ws).unwrap();

    let output = run_runenv(&home, &ws, &["resolve", "REACT_APP_API_BASE_URL"], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "undefined");

    let output = run_runenv(
        &home,
        &ws,
        &["resolve", "REACT_APP_API_BASE_URL", "--fallback", "empty"],
        &[],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_resolve_json_output() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(
        &ws.join("public/env-config.js"),
        "window._env_ = {\n  OTHER_KEY: \"x\",\n}\n",
    );

    let output = run_runenv(
        &home,
        &ws,
        &["resolve", "REACT_APP_API_BASE_URL", "--format", "json"],
        &[],
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["injected"], true);
    assert_eq!(value["present"], false);
    assert_eq!(value["display"], "undefined");
}

#[test]
fn test_inject_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(&ws.join(".env"), "REACT_APP_TITLE=Demo\n");

    let output = run_runenv(&home, &ws, &["inject", "--dry-run"], &[]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("window._env_ = {"));
    assert!(text.contains("\"REACT_APP_TITLE\": \"Demo\""));
    assert!(!ws.join("public/env-config.js").exists());
}

#[test]
fn test_render_and_show() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(
        &ws.join("public/env-config.js"),
        r#"window._env_ = {"REACT_APP_API_BASE_URL": "https://api.example.com"};"#,
    );

    let output = run_runenv(&home, &ws, &["render"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Base Url = https://api.example.com"));

    let output = run_runenv(&home, &ws, &["show", "--format", "json"], &[]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value["values"]["REACT_APP_API_BASE_URL"],
        "https://api.example.com"
    );
}

#[test]
fn test_malformed_dotenv_fails() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(&ws.join(".env"), "GOOD=1\nthis is not valid\n");

    let output = run_runenv(&home, &ws, &["inject"], &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn test_workspace_config_changes_global_name() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(
        &ws.join("config/config.toml"),
        "[runtime]\nglobal_name = \"__CFG__\"\n",
    );
    write_file(&ws.join(".env"), "REACT_APP_API_BASE_URL=https://cfg.example.com\n");

    let output = run_runenv(&home, &ws, &["inject"], &[]);
    assert!(output.status.success());
    let script = std::fs::read_to_string(ws.join("public/env-config.js")).unwrap();
    assert!(script.contains("window.__CFG__ = {"));

    let output = run_runenv(&home, &ws, &["resolve", "REACT_APP_API_BASE_URL"], &[]);
    assert_eq!(stdout(&output), "https://cfg.example.com");
}
