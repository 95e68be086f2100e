//! Command implementations for all notetree commands

use crate::cli::commands::TagArgs;
use crate::cli::tags::TagCommands;
use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::{notes, tags};
use notetree_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Add(args) => notes::handle_add(ctx, args),
            Commands::Show(args) => notes::handle_show(ctx, args),
            Commands::Update(args) => notes::handle_update(ctx, args),
            Commands::List(args) => notes::handle_list(ctx, args),
            Commands::Delete(args) => notes::handle_delete(ctx, args),
            Commands::Move(args) => notes::handle_move(ctx, args),
            Commands::Tag(args) => execute_tag(ctx, args),
        }
    }
}

fn execute_tag(ctx: &CommandContext, args: &TagArgs) -> Result<()> {
    match &args.command {
        TagCommands::Add { path, tags } => tags::handle_add(ctx, path, tags),
        TagCommands::Remove { path, tags } => tags::handle_remove(ctx, path, tags),
    }
}
