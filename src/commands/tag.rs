//! `notetree tag` commands - add or remove note tags

use crate::cli::{Cli, OutputFormat};
use notetree_core::error::Result;
use notetree_core::store::paths::NotePath;
use notetree_core::store::NoteRepository;

/// Execute `tag add`
pub fn execute_add(cli: &Cli, repo: &NoteRepository, ident: &str, tags: &[String]) -> Result<()> {
    let path = repo.resolve(ident, None)?;
    let tags = repo.add_tags(ident, tags)?;
    output_tags(cli, &path, &tags)
}

/// Execute `tag remove`
pub fn execute_remove(
    cli: &Cli,
    repo: &NoteRepository,
    ident: &str,
    tags: &[String],
) -> Result<()> {
    let path = repo.resolve(ident, None)?;
    let tags = repo.remove_tags(ident, tags)?;
    output_tags(cli, &path, &tags)
}

fn output_tags(cli: &Cli, path: &NotePath, tags: &[String]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "tags": tags,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}: {}", path, tags.join(", "));
            }
        }
    }
    Ok(())
}
