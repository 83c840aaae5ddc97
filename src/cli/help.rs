//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string used in log events (e.g. "inject", "resolve").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Inject { .. } => "inject",
        Commands::Resolve { .. } => "resolve",
        Commands::Render { .. } => "render",
        Commands::Show { .. } => "show",
        Commands::Settings => "settings",
    }
}
