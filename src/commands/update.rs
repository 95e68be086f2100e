//! `notetree update` command - replace a note's body and tags
//!
//! Without `--content` the body is kept. Without `--tag` the tags are
//! cleared, unless `--keep-tags` is given.

use crate::cli::{Cli, OutputFormat};
use notetree_core::error::Result;
use notetree_core::store::NoteRepository;

/// Execute the update command
pub fn execute(
    cli: &Cli,
    repo: &NoteRepository,
    ident: &str,
    content: Option<String>,
    tags: &[String],
    keep_tags: bool,
) -> Result<()> {
    let current = repo.get(ident)?;
    let content = content.unwrap_or_else(|| current.body.clone());
    let tags = if keep_tags { &current.tags[..] } else { tags };

    let path = repo.update(ident, &content, tags)?;
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
            if !cli.quiet {
                println!("Updated {}", path);
            }
        }
    }

    Ok(())
}
