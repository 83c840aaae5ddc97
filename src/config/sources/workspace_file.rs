//! Workspace layer: `config/config.toml`, then the profile file
//! `config/{RUNENV_ENV}.toml` on top of it.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the workspace profile file.
pub const PROFILE_ENV_VAR: &str = "RUNENV_ENV";

/// Profile used when `RUNENV_ENV` is unset or empty.
pub const DEFAULT_PROFILE: &str = "development";

pub fn active_profile() -> String {
    match std::env::var(PROFILE_ENV_VAR) {
        Ok(profile) if !profile.is_empty() => profile,
        _ => DEFAULT_PROFILE.to_string(),
    }
}

/// Workspace files in the order they are layered; later files win.
pub fn layered_files(workspace_root: &Path, profile: &str) -> [PathBuf; 2] {
    let config_dir = workspace_root.join("config");
    [
        config_dir.join("config.toml"),
        config_dir.join(format!("{}.toml", profile)),
    ]
}

pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let profile = active_profile();
    for path in layered_files(workspace_root, &profile) {
        if !path.is_file() {
            continue;
        }
        debug!(path = %path.display(), profile = %profile, "Layering workspace config");
        builder = builder.add_source(File::from(path).required(false));
    }
    Ok(builder)
}
