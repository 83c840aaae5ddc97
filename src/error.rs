//! Error types for runtime configuration injection and the runenv CLI.
//!
//! Resolution and page rendering have no error type: absence of the injected
//! object or of a key is a normal value. Everything here belongs to the deploy
//! side (reading `.env`, writing and parsing `env-config.js`) or to the tool's
//! own configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Deploy-side injection errors
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid .env entry at line {line}: {message}")]
    Dotenv { line: usize, message: String },

    #[error("Invalid env script: {0}")]
    Script(String),
}

/// Top-level errors surfaced by the library facade and the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Injection error: {0}")]
    Inject(#[from] InjectError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
