//! Runtime Configuration Resolution
//!
//! The hosting environment injects a flat string map (by convention
//! `window._env_`) before the client first renders. This module reads one
//! value out of that map without ever failing: a missing object and a missing
//! key both resolve to [`ResolvedValue::Absent`].
//!
//! The injected object is always passed in explicitly; nothing here reads
//! process or global state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

mod global;

pub use global::{resolve_path, GlobalScope};

/// Display form of an absent value. Matches what the browser shows for
/// `undefined` when interpolated into text.
pub const ABSENT_MARKER: &str = "undefined";

/// Default name of the injected global object.
pub const DEFAULT_GLOBAL_NAME: &str = "_env_";

/// Key read by the default page.
pub const DEFAULT_KEY: &str = "REACT_APP_API_BASE_URL";

/// Identifier of a single configuration value. Case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(String);

impl ConfigKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Boundary constructor for user input; rejects the empty key.
    pub fn parse(key: &str) -> Result<Self, crate::error::ApiError> {
        if key.is_empty() {
            return Err(crate::error::ApiError::InvalidKey(
                "key cannot be empty".to_string(),
            ));
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The injected configuration object. Read-only once handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeConfig {
    values: BTreeMap<String, String>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Insert or replace a value. Used by the deploy side while assembling.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Result of a lookup. `Absent` is distinct from `Present("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedValue {
    Present(String),
    Absent,
}

impl ResolvedValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, ResolvedValue::Absent)
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            ResolvedValue::Present(value) => Some(value.as_str()),
            ResolvedValue::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            ResolvedValue::Present(value) => Some(value),
            ResolvedValue::Absent => None,
        }
    }

    /// Text to display for this value under the given fallback policy.
    /// Present values are returned unchanged, including empty strings.
    pub fn display_with<'a>(&'a self, policy: &'a FallbackPolicy) -> &'a str {
        match (self, policy) {
            (ResolvedValue::Present(value), _) => value.as_str(),
            (ResolvedValue::Absent, FallbackPolicy::Marker) => ABSENT_MARKER,
            (ResolvedValue::Absent, FallbackPolicy::Empty) => "",
            (ResolvedValue::Absent, FallbackPolicy::Default(value)) => value.as_str(),
        }
    }
}

impl From<Option<String>> for ResolvedValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => ResolvedValue::Present(value),
            None => ResolvedValue::Absent,
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_with(&FallbackPolicy::Marker))
    }
}

/// What to show when a value is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Show the literal `undefined`.
    #[default]
    Marker,
    Empty,
    Default(String),
}

impl FallbackPolicy {
    /// Build a policy from its configuration name.
    pub fn from_name(name: &str, default_value: Option<&str>) -> Option<Self> {
        match name {
            "marker" => Some(FallbackPolicy::Marker),
            "empty" => Some(FallbackPolicy::Empty),
            "default" => default_value.map(|v| FallbackPolicy::Default(v.to_string())),
            _ => None,
        }
    }
}

/// Resolve `key` against a possibly-missing injected object.
///
/// Never fails: a missing object or key yields [`ResolvedValue::Absent`].
/// Matching is exact and case-sensitive; the value is returned untouched.
pub fn resolve(runtime: Option<&RuntimeConfig>, key: &str) -> ResolvedValue {
    let resolved = match runtime {
        None => ResolvedValue::Absent,
        Some(config) => match config.get(key) {
            Some(value) => ResolvedValue::Present(value.to_string()),
            None => ResolvedValue::Absent,
        },
    };
    trace!(
        key,
        injected = runtime.is_some(),
        found = !resolved.is_absent(),
        "Resolved runtime config key"
    );
    resolved
}
