//! Integration tests for the global (XDG) config layer and workspace profiles.

use super::test_utils::{run_runenv, stdout, write_file};
use tempfile::TempDir;

fn page_value(settings: &str, field: &str) -> String {
    let value: toml::Value = toml::from_str(settings).unwrap();
    value["page"][field].as_str().unwrap().to_string()
}

fn settings(home: &std::path::Path, ws: &std::path::Path, env: &[(&str, &str)]) -> String {
    let output = run_runenv(home, ws, &["settings"], env);
    assert!(
        output.status.success(),
        "settings failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout(&output)
}

#[test]
fn test_global_config_from_xdg_config_home() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    std::fs::create_dir_all(&ws).unwrap();
    write_file(
        &home.join(".config/runenv/config.toml"),
        "[page]\nkey = \"GLOBAL_KEY\"\ntitle = \"Global\"\n",
    );

    let out = settings(&home, &ws, &[]);
    assert_eq!(page_value(&out, "key"), "GLOBAL_KEY");
    assert_eq!(page_value(&out, "title"), "Global");
}

#[test]
fn test_global_config_falls_back_to_home() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    std::fs::create_dir_all(&ws).unwrap();
    write_file(
        &home.join(".config/runenv/config.toml"),
        "[page]\nkey = \"HOME_KEY\"\n",
    );

    // Empty XDG_CONFIG_HOME falls back to $HOME/.config.
    let out = settings(&home, &ws, &[("XDG_CONFIG_HOME", "")]);
    assert_eq!(page_value(&out, "key"), "HOME_KEY");
}

#[test]
fn test_workspace_config_overrides_global() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(
        &home.join(".config/runenv/config.toml"),
        "[page]\nkey = \"GLOBAL_KEY\"\ntitle = \"Global\"\n",
    );
    write_file(&ws.join("config/config.toml"), "[page]\nkey = \"WORKSPACE_KEY\"\n");

    let out = settings(&home, &ws, &[]);
    assert_eq!(page_value(&out, "key"), "WORKSPACE_KEY");
    assert_eq!(page_value(&out, "title"), "Global");
}

#[test]
fn test_development_profile_is_default() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(&ws.join("config/config.toml"), "[page]\nkey = \"BASE_KEY\"\n");
    write_file(&ws.join("config/development.toml"), "[page]\nkey = \"DEV_KEY\"\n");
    write_file(&ws.join("config/production.toml"), "[page]\nkey = \"PROD_KEY\"\n");

    let out = settings(&home, &ws, &[]);
    assert_eq!(page_value(&out, "key"), "DEV_KEY");
}

#[test]
fn test_runenv_env_selects_profile() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(
        &ws.join("config/config.toml"),
        "[page]\nkey = \"BASE_KEY\"\ntitle = \"Base\"\n",
    );
    write_file(&ws.join("config/development.toml"), "[page]\nkey = \"DEV_KEY\"\n");
    write_file(&ws.join("config/production.toml"), "[page]\nkey = \"PROD_KEY\"\n");

    let out = settings(&home, &ws, &[("RUNENV_ENV", "production")]);
    assert_eq!(page_value(&out, "key"), "PROD_KEY");
    assert_eq!(page_value(&out, "title"), "Base");

    let out = settings(&home, &ws, &[("RUNENV_ENV", "staging")]);
    assert_eq!(page_value(&out, "key"), "BASE_KEY");
}

#[test]
fn test_environment_overrides_profile() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let ws = temp.path().join("ws");
    write_file(&ws.join("config/development.toml"), "[page]\nkey = \"DEV_KEY\"\n");

    let out = settings(&home, &ws, &[("RUNENV__PAGE__KEY", "ENV_KEY")]);
    assert_eq!(page_value(&out, "key"), "ENV_KEY");
}
