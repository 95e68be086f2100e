//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use notetree_core::error::Result;
use notetree_core::store::NoteRepository;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Open the note repository at the resolved storage root
    pub fn open_repository(&self) -> Result<NoteRepository> {
        NoteRepository::open(self.root)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("notetree {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Hierarchical notes stored as plain files.");
        println!();
        println!("Run `notetree --help` for usage information.");
        Ok(())
    }
}
