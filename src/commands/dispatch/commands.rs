//! Routing from parsed subcommands to command modules

use crate::cli::{CombineCommands, Commands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{combine, init, list, tags};
use slor_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init => init::execute(ctx),
            Commands::List { tag } => list::execute(ctx, tag),
            Commands::Tags => tags::execute(ctx),
            Commands::Combine { command } => command.execute(ctx),
        }?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}

impl Command for CombineCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            CombineCommands::Show => combine::show(ctx),
            CombineCommands::Toggle { ids, dry_run } => combine::toggle(ctx, ids, *dry_run),
            CombineCommands::Clear => combine::clear(ctx),
        }
    }
}
