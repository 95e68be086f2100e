//! `notetree delete` command - delete a note and its sub-notes

use crate::cli::{Cli, OutputFormat};
use notetree_core::error::Result;
use notetree_core::store::NoteRepository;

/// Execute the delete command
pub fn execute(cli: &Cli, repo: &NoteRepository, ident: &str) -> Result<()> {
    let path = repo.resolve(ident, None)?;
    repo.delete(ident)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "deleted": path });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {}", path);
            }
        }
    }

    Ok(())
}
