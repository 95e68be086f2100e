//! Helper functions shared across commands

use std::io::{self, Read};

use notetree_core::error::{NoteError, Result};

/// Resolve a `--content` argument; `-` reads the body from stdin.
pub fn read_content(content: Option<&str>) -> Result<Option<String>> {
    match content {
        Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| NoteError::io_operation("read", "stdin", e))?;
            Ok(Some(buffer))
        }
        Some(content) => Ok(Some(content.to_string())),
        None => Ok(None),
    }
}

/// Human summary of a note's counts, empty when it has no sub-notes
pub fn counts_suffix(children: Option<usize>, descendants: Option<usize>) -> String {
    match (children, descendants) {
        (Some(children), Some(descendants)) => {
            format!(" ({} children, {} descendants)", children, descendants)
        }
        _ => String::new(),
    }
}
