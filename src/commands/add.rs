//! `notetree add` command - create a note

use crate::cli::{Cli, OutputFormat};
use notetree_core::error::Result;
use notetree_core::store::NoteRepository;

/// Execute the add command
pub fn execute(
    cli: &Cli,
    repo: &NoteRepository,
    title: &str,
    content: &str,
    tags: &[String],
    parent: Option<&str>,
) -> Result<()> {
    let path = repo.add(title, content, tags, parent)?;
    let note = repo.get(path.as_str())?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": note.path,
                "title": note.title,
                "tags": note.tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", path);
        }
    }

    Ok(())
}
