//! Guarded lookup into a host-provided global object (`window?._env_?.KEY`).

use super::{ResolvedValue, RuntimeConfig};
use serde_json::{Map, Value};
use tracing::trace;

/// Walk `path` from `root`, checking each link before stepping into it.
///
/// Any missing link, or an intermediate link that is not an object, yields
/// `Absent`. A terminal that is not a string is also `Absent`; values are
/// never coerced.
pub fn resolve_path(root: Option<&Value>, path: &[&str]) -> ResolvedValue {
    let mut current = match root {
        Some(value) => value,
        None => return ResolvedValue::Absent,
    };

    for segment in path {
        match current.as_object().and_then(|obj| obj.get(*segment)) {
            Some(next) => current = next,
            None => {
                trace!(segment, "Lookup path link missing");
                return ResolvedValue::Absent;
            }
        }
    }

    match current {
        Value::String(value) => ResolvedValue::Present(value.clone()),
        _ => ResolvedValue::Absent,
    }
}

/// Snapshot of the host's global object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalScope {
    root: Map<String, Value>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global with `object_name` set to the given config.
    pub fn with_injected(object_name: &str, config: &RuntimeConfig) -> Self {
        let object: Map<String, Value> = config
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        let mut root = Map::new();
        root.insert(object_name.to_string(), Value::Object(object));
        Self { root }
    }

    /// Wrap an arbitrary JSON value. Non-object values produce an empty scope.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    /// Extract the injected object as a string map. Members that are not
    /// strings are skipped.
    pub fn runtime_config(&self, object_name: &str) -> Option<RuntimeConfig> {
        let object = self.root.get(object_name)?.as_object()?;
        Some(RuntimeConfig::from_pairs(object.iter().filter_map(
            |(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())),
        )))
    }

    pub fn resolve(&self, object_name: &str, key: &str) -> ResolvedValue {
        resolve_path(self.root.get(object_name), &[key])
    }
}
