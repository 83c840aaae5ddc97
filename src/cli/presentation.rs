//! CLI presentation: text and json formatters per command family.

mod inject;
mod resolve;
mod shared;

pub use inject::{format_inject_json, format_inject_text};
pub use resolve::{format_resolve_json, format_resolve_text};
pub use shared::{format_show_json, format_show_text};
