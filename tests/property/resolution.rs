//! Property-based tests for the resolver contract

use proptest::prelude::*;
use runenv::inject::{dotenv, script};
use runenv::{resolve, ResolvedValue, RuntimeConfig};
use std::collections::BTreeMap;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,16}"
}

proptest! {
    #[test]
    fn present_key_resolves_to_its_value(
        entries in prop::collection::btree_map(key_strategy(), any::<String>(), 0..8),
        key in key_strategy(),
        value in any::<String>(),
    ) {
        let mut config = RuntimeConfig::from_pairs(entries);
        config.insert(key.clone(), value.clone());
        prop_assert_eq!(resolve(Some(&config), &key), ResolvedValue::Present(value));
    }

    #[test]
    fn absent_key_or_object_resolves_absent(
        entries in prop::collection::btree_map(key_strategy(), any::<String>(), 0..8),
        key in key_strategy(),
    ) {
        prop_assert!(resolve(None, &key).is_absent());
        let config = RuntimeConfig::from_pairs(entries.into_iter().filter(|(k, _)| *k != key));
        prop_assert!(resolve(Some(&config), &key).is_absent());
    }

    #[test]
    fn resolve_is_idempotent(
        entries in prop::collection::btree_map(key_strategy(), any::<String>(), 0..8),
        key in any::<String>(),
    ) {
        let config = RuntimeConfig::from_pairs(entries);
        prop_assert_eq!(resolve(Some(&config), &key), resolve(Some(&config), &key));
    }

    #[test]
    fn rendered_script_parses_back(
        entries in prop::collection::btree_map(key_strategy(), any::<String>(), 0..8),
    ) {
        let config = RuntimeConfig::from_pairs(entries);
        let text = script::render(&config, "_env_", chrono::Utc::now()).unwrap();
        prop_assert_eq!(script::parse(&text, "_env_").unwrap(), config);
    }

    #[test]
    fn dotenv_plain_values_kept(
        entries in prop::collection::btree_map(key_strategy(), "[A-Za-z0-9:/._-]{0,24}", 0..8),
    ) {
        let text: String = entries.iter().map(|(k, v)| format!("{}={}\n", k, v)).collect();
        let parsed = dotenv::parse(&text).unwrap();
        let expected: BTreeMap<&str, &str> =
            entries.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let actual: BTreeMap<&str, &str> = parsed.iter().collect();
        prop_assert_eq!(actual, expected);
    }
}
