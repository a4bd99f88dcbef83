//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List { json } => commands::breakpoints::list(&cli, *json),
        Commands::Add(bp) => commands::breakpoints::add(&cli, bp),
        Commands::Remove(bp) => commands::breakpoints::remove(&cli, bp),
        Commands::Toggle(bp) => commands::breakpoints::toggle(&cli, bp),
        Commands::Clear => commands::breakpoints::clear(&cli),
        Commands::Check { json } => commands::breakpoints::check(&cli, *json),
        Commands::Workspace => commands::workspace::show(&cli),
        Commands::Artifacts { cargo_args } => commands::workspace::artifacts(&cli, cargo_args),
        Commands::Locators => commands::workspace::locators(),
    }
}
