//! `notetree move` command - move a note and its sub-notes

use crate::cli::{Cli, OutputFormat};
use notetree_core::error::Result;
use notetree_core::store::NoteRepository;

/// Execute the move command
pub fn execute(cli: &Cli, repo: &NoteRepository, ident: &str, to: Option<&str>) -> Result<()> {
    let old = repo.resolve(ident, None)?;
    let new = repo.move_note(ident, to)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": old,
                "to": new,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if old == new {
                if !cli.quiet {
                    println!("{} already in place", new);
                }
            } else {
                println!("{}", new);
            }
        }
    }

    Ok(())
}
