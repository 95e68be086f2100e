//! Handlers for note-related commands

use crate::cli::args::{AddArgs, DeleteArgs, ListArgs, MoveArgs, ShowArgs, UpdateArgs};
use crate::commands;
use crate::commands::helpers::read_content;
use notetree_core::error::Result;

use super::command::CommandContext;
use super::macros::trace_command;

pub(super) fn handle_add(ctx: &CommandContext, args: &AddArgs) -> Result<()> {
    let content = read_content(args.content.as_deref())?.unwrap_or_default();
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::add::execute(
        ctx.cli,
        &repo,
        &args.title,
        &content,
        &args.tag,
        args.parent.as_deref(),
    )?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_show(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::show::execute(ctx.cli, &repo, &args.path, args.parent.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_update(ctx: &CommandContext, args: &UpdateArgs) -> Result<()> {
    let content = read_content(args.content.as_deref())?;
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::update::execute(
        ctx.cli,
        &repo,
        &args.path,
        content,
        &args.tag,
        args.keep_tags,
    )?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::list::execute(ctx.cli, &repo, args.parent.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_delete(ctx: &CommandContext, args: &DeleteArgs) -> Result<()> {
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::delete::execute(ctx.cli, &repo, &args.path)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_move(ctx: &CommandContext, args: &MoveArgs) -> Result<()> {
    let repo = ctx.open_repository()?;
    trace_command!(ctx.cli, ctx.start, "open_repository");
    commands::move_note::execute(ctx.cli, &repo, &args.path, args.to.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}
