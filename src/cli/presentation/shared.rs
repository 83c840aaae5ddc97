//! Show command presentation: injected keys as a table or json.

use crate::runtime::RuntimeConfig;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub fn format_show_text(path: &Path, runtime: Option<&RuntimeConfig>) -> String {
    let runtime = match runtime {
        Some(runtime) => runtime,
        None => {
            return format!(
                "{} no env script at {}",
                "Not injected:".yellow(),
                path.display()
            )
        }
    };
    if runtime.is_empty() {
        return format!("{} injects no keys", path.display());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Value"]);
    for (key, value) in runtime.iter() {
        let shown = if value.is_empty() { "(empty)" } else { value };
        table.add_row(vec![key, shown]);
    }
    format!("{}\n\nTotal: {} key(s)", table, runtime.len())
}

pub fn format_show_json(path: &Path, runtime: Option<&RuntimeConfig>) -> String {
    let out = json!({
        "path": path.display().to_string(),
        "injected": runtime.is_some(),
        "values": runtime,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
