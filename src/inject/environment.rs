//! Overlay the deploy environment onto declared `.env` defaults.

use crate::runtime::RuntimeConfig;
use std::collections::BTreeMap;

/// Outcome of overlaying an environment onto defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub config: RuntimeConfig,
    /// Declared keys whose default was replaced by the environment.
    pub overridden: Vec<String>,
    /// Undeclared keys picked up through the prefix.
    pub added: Vec<String>,
}

/// Snapshot of the current process environment. Entries that are not valid
/// unicode are skipped.
pub fn process_env() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Each declared key takes the environment's value when set, else its default.
/// With a prefix, undeclared environment variables starting with it are added.
pub fn overlay<I>(defaults: &RuntimeConfig, env: I, prefix: Option<&str>) -> Overlay
where
    I: IntoIterator<Item = (String, String)>,
{
    let env: BTreeMap<String, String> = env.into_iter().collect();
    let mut result = Overlay::default();

    for (key, default) in defaults.iter() {
        match env.get(key) {
            Some(value) => {
                result.config.insert(key, value.clone());
                result.overridden.push(key.to_string());
            }
            None => {
                result.config.insert(key, default);
            }
        }
    }

    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        for (key, value) in env.iter().filter(|(k, _)| k.starts_with(prefix)) {
            if !defaults.contains_key(key) {
                result.config.insert(key.clone(), value.clone());
                result.added.push(key.clone());
            }
        }
    }

    result
}
