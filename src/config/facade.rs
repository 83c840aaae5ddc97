//! ConfigLoader: builds RunenvConfig from defaults, files, and environment.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::RunenvConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest to lowest):
    /// 1. RUNENV__* environment variables
    /// 2. config/{RUNENV_ENV}.toml in the workspace
    /// 3. config/config.toml in the workspace
    /// 4. global config file
    /// 5. defaults
    pub fn load(workspace_root: &Path) -> Result<RunenvConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: RunenvConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file on top of defaults.
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<RunenvConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Defaults only, without reading files or environment.
    pub fn defaults() -> Result<RunenvConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .build()?
            .try_deserialize()
    }

    /// Path of the global configuration file, if HOME or XDG_CONFIG_HOME is set.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
