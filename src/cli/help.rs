//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "get", "meta").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Show => "show",
        Commands::Get { .. } => "get",
        Commands::List { .. } => "list",
        Commands::Meta { .. } => "meta",
        Commands::Refresh { .. } => "refresh",
    }
}
