//! CLI parse: clap types for runenv. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// runenv CLI - deploy-time configuration for statically served client apps
#[derive(Parser)]
#[command(name = "runenv")]
#[command(about = "Inject and resolve runtime configuration for client applications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the env script from .env defaults and the current environment
    Inject {
        /// .env file declaring keys and defaults
        #[arg(long)]
        dotenv: Option<PathBuf>,
        /// Script output path
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the script instead of writing it
        #[arg(long)]
        dry_run: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Resolve one key from the injected script
    Resolve {
        /// Key to resolve (case-sensitive)
        key: String,
        /// Env script to read
        #[arg(long)]
        script: Option<PathBuf>,
        /// Fallback when absent (marker, empty, default)
        #[arg(long)]
        fallback: Option<String>,
        /// Value shown when fallback is "default"
        #[arg(long)]
        default: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Render the page with the injected value
    Render {
        /// Env script to read
        #[arg(long)]
        script: Option<PathBuf>,
        /// Write HTML to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List injected keys
    Show {
        /// Env script to read
        #[arg(long)]
        script: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective runenv configuration
    Settings,
}
