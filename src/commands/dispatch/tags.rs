//! Handlers for tag subcommands

use crate::commands;
use notetree_core::error::Result;

use super::command::CommandContext;
use super::macros::trace_command;

pub(super) fn handle_add(ctx: &CommandContext, path: &str, tags: &[String]) -> Result<()> {
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::tag::execute_add(ctx.cli, &repo, path, tags)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_remove(ctx: &CommandContext, path: &str, tags: &[String]) -> Result<()> {
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::tag::execute_remove(ctx.cli, &repo, path, tags)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}
