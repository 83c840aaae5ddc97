//! CLI route: single route table and run context.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_inject_json, format_inject_text, format_resolve_json, format_resolve_text,
    format_show_json, format_show_text,
};
use crate::config::{ConfigLoader, RunenvConfig};
use crate::error::ApiError;
use crate::inject::{dotenv, environment};
use crate::render::render_page;
use crate::runtime::{resolve, ConfigKey, FallbackPolicy, RuntimeConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and validated configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: RunenvConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::from_config(workspace_root, config)
    }

    /// Create run context from an already loaded configuration.
    pub fn from_config(workspace_root: PathBuf, config: RunenvConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &RunenvConfig {
        &self.config
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Inject {
                dotenv,
                out,
                dry_run,
                format,
            } => self.handle_inject(dotenv.as_deref(), out.as_deref(), *dry_run, format),
            Commands::Resolve {
                key,
                script,
                fallback,
                default,
                format,
            } => self.handle_resolve(
                key,
                script.as_deref(),
                fallback.as_deref(),
                default.as_deref(),
                format,
            ),
            Commands::Render { script, out } => self.handle_render(script.as_deref(), out.as_deref()),
            Commands::Show { script, format } => self.handle_show(script.as_deref(), format),
            Commands::Settings => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::Output(e.to_string())),
        }
    }

    fn script_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => self.workspace_root.join(path),
            None => self.config.runtime.resolve_script_path(&self.workspace_root),
        }
    }

    /// Read the injected object. A missing script is "not injected", not an error.
    fn load_runtime(&self, path: &Path) -> Result<Option<RuntimeConfig>, ApiError> {
        let runtime = self.config.runtime.injector().load(path)?;
        debug!(path = %path.display(), injected = runtime.is_some(), "Loaded env script");
        Ok(runtime)
    }

    fn handle_inject(
        &self,
        dotenv_path: Option<&Path>,
        out: Option<&Path>,
        dry_run: bool,
        format: &str,
    ) -> Result<String, ApiError> {
        let injector = self.config.runtime.injector();
        let dotenv_path = match dotenv_path {
            Some(path) => self.workspace_root.join(path),
            None => self.config.runtime.resolve_dotenv_path(&self.workspace_root),
        };
        let out = self.script_path(out);

        let defaults = dotenv::load(&dotenv_path)?;
        let overlay = injector.assemble(&defaults, environment::process_env());

        if dry_run {
            return match format {
                "json" => Ok(format_inject_json(&out, &overlay, false)),
                _ => Ok(injector.render(&overlay.config)?),
            };
        }

        injector.write(&overlay.config, &out)?;
        match format {
            "json" => Ok(format_inject_json(&out, &overlay, true)),
            _ => Ok(format_inject_text(&out, &overlay)),
        }
    }

    fn handle_resolve(
        &self,
        key: &str,
        script: Option<&Path>,
        fallback: Option<&str>,
        default: Option<&str>,
        format: &str,
    ) -> Result<String, ApiError> {
        let key = ConfigKey::parse(key)?;
        let policy = self.fallback_policy(fallback, default)?;
        let runtime = self.load_runtime(&self.script_path(script))?;
        let resolved = resolve(runtime.as_ref(), key.as_str());

        match format {
            "json" => Ok(format_resolve_json(
                key.as_str(),
                runtime.is_some(),
                &resolved,
                &policy,
            )),
            _ => Ok(format_resolve_text(&resolved, &policy)),
        }
    }

    fn handle_render(&self, script: Option<&Path>, out: Option<&Path>) -> Result<String, ApiError> {
        let script_path = self.script_path(script);
        let runtime = self.load_runtime(&script_path)?;
        let script_src = script_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "env-config.js".to_string());
        let template = self.config.page.template(&script_src);
        let policy = self.fallback_policy(None, None)?;
        let html = render_page(&template, runtime.as_ref(), &policy);

        match out {
            Some(path) => {
                let path = self.workspace_root.join(path);
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, html)?;
                Ok(format!("Rendered page to {}", path.display()))
            }
            None => Ok(html),
        }
    }

    fn handle_show(&self, script: Option<&Path>, format: &str) -> Result<String, ApiError> {
        let path = self.script_path(script);
        let runtime = self.load_runtime(&path)?;
        match format {
            "json" => Ok(format_show_json(&path, runtime.as_ref())),
            _ => Ok(format_show_text(&path, runtime.as_ref())),
        }
    }

    /// Command-line fallback wins over the configured one.
    fn fallback_policy(
        &self,
        fallback: Option<&str>,
        default: Option<&str>,
    ) -> Result<FallbackPolicy, ApiError> {
        let name = fallback.unwrap_or(&self.config.page.fallback);
        let default = default.or(self.config.page.default_value.as_deref());
        FallbackPolicy::from_name(name, default).ok_or_else(|| {
            ApiError::ConfigError(format!(
                "Invalid fallback '{}' (use marker, empty, or default with a default value)",
                name
            ))
        })
    }
}
