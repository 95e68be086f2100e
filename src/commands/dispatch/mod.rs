//! Command dispatch logic for notetree

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use notetree_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;
mod notes;
mod tags;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.dir.clone());

    debug!(elapsed = ?start.elapsed(), root = %root.display(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
