//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; the route table dispatches to runtime, inject, and render.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_inject_json, format_inject_text, format_resolve_json, format_resolve_text,
    format_show_json, format_show_text,
};
pub use route::RunContext;
