//! Resolve command presentation.

use crate::runtime::{FallbackPolicy, ResolvedValue};
use serde_json::json;

/// The displayed value only, so the output can be captured by scripts.
pub fn format_resolve_text(resolved: &ResolvedValue, policy: &FallbackPolicy) -> String {
    resolved.display_with(policy).to_string()
}

pub fn format_resolve_json(
    key: &str,
    injected: bool,
    resolved: &ResolvedValue,
    policy: &FallbackPolicy,
) -> String {
    let out = json!({
        "key": key,
        "injected": injected,
        "present": !resolved.is_absent(),
        "value": resolved.as_deref(),
        "display": resolved.display_with(policy),
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
