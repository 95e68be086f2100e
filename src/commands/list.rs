//! `notetree list` command - list one level of the tree

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::counts_suffix;
use notetree_core::error::Result;
use notetree_core::store::NoteRepository;

/// Execute the list command
pub fn execute(cli: &Cli, repo: &NoteRepository, parent: Option<&str>) -> Result<()> {
    let notes = repo.list(parent)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        OutputFormat::Human => {
            if notes.is_empty() {
                if !cli.quiet {
                    println!("No notes found");
                }
                return Ok(());
            }
            for note in &notes {
                let tags = if note.tags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", note.tags.join(", "))
                };
                println!(
                    "{} {}{}{}",
                    note.path,
                    note.title,
                    tags,
                    counts_suffix(note.children_count, note.descendant_count)
                );
            }
        }
    }

    Ok(())
}
