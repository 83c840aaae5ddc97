//! Injection: assemble the runtime config at deploy time and write the
//! `env-config.js` the page loads before it renders.

pub mod dotenv;
pub mod environment;
pub mod script;

use crate::error::InjectError;
use crate::runtime::RuntimeConfig;
use chrono::Utc;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub use environment::Overlay;

/// Result of writing an env script.
#[derive(Debug, Clone)]
pub struct InjectReport {
    pub path: PathBuf,
    pub overlay: Overlay,
}

/// Deploy-side assembler for the injected object.
#[derive(Debug, Clone)]
pub struct Injector {
    global_name: String,
    env_prefix: Option<String>,
}

impl Injector {
    pub fn new(global_name: impl Into<String>, env_prefix: Option<String>) -> Self {
        Self {
            global_name: global_name.into(),
            env_prefix,
        }
    }

    pub fn global_name(&self) -> &str {
        &self.global_name
    }

    /// Overlay `env` onto the declared defaults.
    pub fn assemble<I>(&self, defaults: &RuntimeConfig, env: I) -> Overlay
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let overlay = environment::overlay(defaults, env, self.env_prefix.as_deref());
        debug!(
            declared = defaults.len(),
            overridden = overlay.overridden.len(),
            added = overlay.added.len(),
            "Assembled runtime config"
        );
        overlay
    }

    /// Script text for `config`, stamped with the current time.
    pub fn render(&self, config: &RuntimeConfig) -> Result<String, InjectError> {
        script::render(config, &self.global_name, Utc::now())
    }

    /// Write the script for `config` to `path`. The script is staged in a
    /// temp file beside `path` and persisted in one rename, so a page never
    /// loads a half-written script. The temp file is removed on failure.
    pub fn write(&self, config: &RuntimeConfig, path: &Path) -> Result<(), InjectError> {
        let text = self.render(config)?;
        let write_err = |source| InjectError::Write {
            path: path.to_path_buf(),
            source,
        };

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).map_err(write_err)?;

        let mut staged = NamedTempFile::new_in(parent).map_err(write_err)?;
        staged.write_all(text.as_bytes()).map_err(write_err)?;
        staged.persist(path).map_err(|e| write_err(e.error))?;

        info!(path = %path.display(), keys = config.len(), "Wrote env script");
        Ok(())
    }

    /// Read `.env` defaults, overlay `env`, and write the script.
    pub fn inject<I>(&self, dotenv_path: &Path, env: I, out: &Path) -> Result<InjectReport, InjectError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let defaults = dotenv::load(dotenv_path)?;
        let overlay = self.assemble(&defaults, env);
        self.write(&overlay.config, out)?;
        Ok(InjectReport {
            path: out.to_path_buf(),
            overlay,
        })
    }

    /// Read back an injected script. `None` when the file does not exist.
    pub fn load(&self, path: &Path) -> Result<Option<RuntimeConfig>, InjectError> {
        script::load(path, &self.global_name)
    }
}
