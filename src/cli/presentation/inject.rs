//! Inject command presentation.

use crate::inject::Overlay;
use serde_json::json;
use std::path::Path;

pub fn format_inject_text(path: &Path, overlay: &Overlay) -> String {
    let mut output = format!(
        "Wrote {} key(s) to {}\n",
        overlay.config.len(),
        path.display()
    );
    if !overlay.overridden.is_empty() {
        output.push_str(&format!(
            "Overridden from environment: {}\n",
            overlay.overridden.join(", ")
        ));
    }
    if !overlay.added.is_empty() {
        output.push_str(&format!("Added by prefix: {}\n", overlay.added.join(", ")));
    }
    output
}

pub fn format_inject_json(path: &Path, overlay: &Overlay, written: bool) -> String {
    let keys: Vec<&str> = overlay.config.iter().map(|(k, _)| k).collect();
    let out = json!({
        "path": path.display().to_string(),
        "written": written,
        "keys": keys,
        "overridden": overlay.overridden,
        "added": overlay.added,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
