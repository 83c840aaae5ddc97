//! runenv: Runtime Configuration for Client Applications
//!
//! Lets a statically built client read configuration injected by its hosting
//! environment at deploy time. The deploy side writes `env-config.js`
//! assigning `window._env_`; the client side resolves one key at a time from
//! that object and never fails when the object or key is missing.

pub mod cli;
pub mod config;
pub mod error;
pub mod inject;
pub mod logging;
pub mod render;
pub mod runtime;

pub use runtime::{resolve, ConfigKey, FallbackPolicy, ResolvedValue, RuntimeConfig};
