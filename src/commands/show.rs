//! `notetree show` command - print a note
//!
//! Human output is the note file exactly as stored.

use crate::cli::{Cli, OutputFormat};
use notetree_core::error::Result;
use notetree_core::store::NoteRepository;

/// Execute the show command
pub fn execute(cli: &Cli, repo: &NoteRepository, ident: &str, parent: Option<&str>) -> Result<()> {
    let note = match parent {
        Some(_) => {
            let path = repo.resolve(ident, parent)?;
            repo.get(path.as_str())?
        }
        None => repo.get(ident)?,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&note)?);
        }
        OutputFormat::Human => {
            let text = note.to_text();
            if text.ends_with('\n') {
                print!("{}", text);
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
