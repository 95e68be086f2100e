//! Main CLI commands enum

use clap::{Args, Subcommand};

use crate::cli::args::{AddArgs, DeleteArgs, ListArgs, MoveArgs, ShowArgs, UpdateArgs};
use crate::cli::tags::TagCommands;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    Add(AddArgs),

    /// Print a note
    Show(ShowArgs),

    /// Replace a note's body and tags
    Update(UpdateArgs),

    /// List notes at one level of the tree
    List(ListArgs),

    /// Delete a note and everything below it
    Delete(DeleteArgs),

    /// Move a note and its sub-notes
    Move(MoveArgs),

    /// Manage note tags
    Tag(TagArgs),
}

#[derive(Args, Debug)]
pub struct TagArgs {
    #[command(subcommand)]
    pub command: TagCommands,
}
