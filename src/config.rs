//! Configuration System
//!
//! Settings for the runenv tool itself: where the injected script lives, what
//! the global is called, which key the page shows, and logging. Loaded in
//! layers (defaults, global file, workspace files, environment) through the
//! `config` crate.

use crate::inject::Injector;
use crate::logging::LoggingConfig;
use crate::render::PageTemplate;
use crate::runtime::{FallbackPolicy, DEFAULT_GLOBAL_NAME, DEFAULT_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::workspace_file::PROFILE_ENV_VAR;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunenvConfig {
    /// Injection settings
    #[serde(default)]
    pub runtime: RuntimeSettings,

    /// Rendered page settings
    #[serde(default)]
    pub page: PageSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the injected object comes from and how it is named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSettings {
    /// Name of the global object assigned on `window`
    #[serde(default = "default_global_name")]
    pub global_name: String,

    /// Generated script, relative to the workspace root
    #[serde(default = "default_script_path")]
    pub script_path: PathBuf,

    /// Declared keys and their defaults, relative to the workspace root
    #[serde(default = "default_dotenv_path")]
    pub dotenv_path: PathBuf,

    /// Environment variables with this prefix are injected even if undeclared.
    /// Empty disables prefix capture.
    #[serde(default = "default_env_prefix")]
    pub env_prefix: Option<String>,
}

fn default_global_name() -> String {
    DEFAULT_GLOBAL_NAME.to_string()
}

fn default_script_path() -> PathBuf {
    PathBuf::from("public/env-config.js")
}

fn default_dotenv_path() -> PathBuf {
    PathBuf::from(".env")
}

fn default_env_prefix() -> Option<String> {
    Some("REACT_APP_".to_string())
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            global_name: default_global_name(),
            script_path: default_script_path(),
            dotenv_path: default_dotenv_path(),
            env_prefix: default_env_prefix(),
        }
    }
}

impl RuntimeSettings {
    pub fn resolve_script_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.script_path)
    }

    pub fn resolve_dotenv_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.dotenv_path)
    }

    pub fn injector(&self) -> Injector {
        let prefix = self.env_prefix.clone().filter(|p| !p.is_empty());
        Injector::new(self.global_name.clone(), prefix)
    }
}

/// What the page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSettings {
    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub logo_src: Option<String>,

    #[serde(default)]
    pub link_href: Option<String>,

    #[serde(default)]
    pub link_label: Option<String>,

    /// marker, empty, or default
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Required when fallback is "default"
    #[serde(default)]
    pub default_value: Option<String>,
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_fallback() -> String {
    "marker".to_string()
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            key: default_key(),
            title: None,
            logo_src: None,
            link_href: None,
            link_label: None,
            fallback: default_fallback(),
            default_value: None,
        }
    }
}

impl PageSettings {
    /// Page template with configured overrides applied.
    pub fn template(&self, script_src: &str) -> PageTemplate {
        let mut template = PageTemplate {
            key: self.key.clone(),
            script_src: script_src.to_string(),
            ..PageTemplate::default()
        };
        if let Some(title) = &self.title {
            template.title = title.clone();
        }
        if let Some(logo) = &self.logo_src {
            template.logo_src = logo.clone();
        }
        if let Some(href) = &self.link_href {
            template.link_href = href.clone();
        }
        if let Some(label) = &self.link_label {
            template.link_label = label.clone();
        }
        template
    }

    /// Configured fallback policy, `None` if the name is unknown or a default
    /// value is missing.
    pub fn fallback_policy(&self) -> Option<FallbackPolicy> {
        FallbackPolicy::from_name(&self.fallback, self.default_value.as_deref())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Runtime(String),
    Page(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Runtime(msg) => write!(f, "runtime: {}", msg),
            ValidationError::Page(msg) => write!(f, "page: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// JavaScript identifier check for the global name (ASCII subset).
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl RunenvConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !is_js_identifier(&self.runtime.global_name) {
            errors.push(ValidationError::Runtime(format!(
                "global_name '{}' is not a valid identifier",
                self.runtime.global_name
            )));
        }
        if self.runtime.script_path.as_os_str().is_empty() {
            errors.push(ValidationError::Runtime(
                "script_path cannot be empty".to_string(),
            ));
        }

        if self.page.key.is_empty() {
            errors.push(ValidationError::Page("key cannot be empty".to_string()));
        }
        match self.page.fallback.as_str() {
            "marker" | "empty" => {}
            "default" if self.page.default_value.is_some() => {}
            "default" => errors.push(ValidationError::Page(
                "fallback 'default' requires default_value".to_string(),
            )),
            other => errors.push(ValidationError::Page(format!(
                "unknown fallback '{}' (must be 'marker', 'empty', or 'default')",
                other
            ))),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
