//! Merge rules: defaults, override order, conflict handling.

use crate::runtime::{DEFAULT_GLOBAL_NAME, DEFAULT_KEY};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("runtime.global_name", DEFAULT_GLOBAL_NAME)?
        .set_default("runtime.script_path", "public/env-config.js")?
        .set_default("runtime.dotenv_path", ".env")?
        .set_default("runtime.env_prefix", "REACT_APP_")?
        .set_default("page.key", DEFAULT_KEY)?
        .set_default("page.fallback", "marker")
}
