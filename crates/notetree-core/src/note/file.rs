//! On-disk note format
//!
//! ```text
//! # <title>
//! Tags: <tag1>, <tag2>
//!
//! <body, verbatim>
//! ```
//!
//! The tags line may be missing on read. Writes always go through an atomic
//! replace of the target file.

use std::fs;
use std::path::Path;

use crate::error::{NoteError, Result};
use crate::store::io::atomic_write;

const TITLE_PREFIX: &str = "# ";
const TAGS_PREFIX: &str = "Tags:";

/// Title, tags and body of a single note file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub title: String,
    pub tags: Vec<String>,
    pub body: String,
}

/// Serialize a note to its on-disk text.
pub fn render(title: &str, tags: &[String], body: &str) -> String {
    format!("{}{}\n{} {}\n\n{}", TITLE_PREFIX, title, TAGS_PREFIX, tags.join(", "), body)
}

/// Split off the first line, dropping a trailing `\r`.
fn split_line(text: &str) -> (&str, Option<&str>) {
    match text.split_once('\n') {
        Some((line, rest)) => (line.strip_suffix('\r').unwrap_or(line), Some(rest)),
        None => (text.strip_suffix('\r').unwrap_or(text), None),
    }
}

fn parse_tags(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

impl NoteFile {
    pub fn new(title: impl Into<String>, tags: Vec<String>, body: impl Into<String>) -> Self {
        NoteFile {
            title: title.into(),
            tags,
            body: body.into(),
        }
    }

    /// Parse note text. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let (first, rest) = split_line(content);
        let title = first
            .strip_prefix(TITLE_PREFIX)
            .ok_or_else(|| NoteError::corrupt(path, "missing '# ' title line"))?;

        let mut rest = rest.unwrap_or("");
        let mut tags = Vec::new();
        if rest.starts_with(TAGS_PREFIX) {
            let (line, after) = split_line(rest);
            tags = parse_tags(&line[TAGS_PREFIX.len()..]);
            rest = after.unwrap_or("");
        }

        let body = if rest.is_empty() {
            ""
        } else {
            let (separator, after) = split_line(rest);
            if !separator.is_empty() {
                return Err(NoteError::corrupt(
                    path,
                    "missing blank line between header and body",
                ));
            }
            after.unwrap_or("")
        };

        Ok(NoteFile {
            title: title.to_string(),
            tags,
            body: body.to_string(),
        })
    }

    pub fn render(&self) -> String {
        render(&self.title, &self.tags, &self.body)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        atomic_write(path, self.render().as_bytes())
    }

    /// Replace only the tags of the note at `path`, keeping title and body.
    pub fn rewrite_tags(path: &Path, tags: Vec<String>) -> Result<Self> {
        let mut note = Self::read(path)?;
        note.tags = tags;
        note.write(path)?;
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<NoteFile> {
        NoteFile::parse(content, Path::new("note.md"))
    }

    #[test]
    fn test_render_matches_layout() {
        let note = NoteFile::new(
            "My First Note",
            vec!["personal".to_string(), "first note".to_string()],
            "This is the content of my note.",
        );
        assert_eq!(
            note.render(),
            "# My First Note\nTags: personal, first note\n\nThis is the content of my note."
        );
    }

    #[test]
    fn test_render_empty_tags() {
        let note = NoteFile::new("Test Note", vec![], "Updated content");
        assert_eq!(note.render(), "# Test Note\nTags: \n\nUpdated content");
    }

    #[test]
    fn test_parse_full_note() {
        let note = parse("# Title\nTags: a, b\n\nline one\n\nline two\n").unwrap();
        assert_eq!(note.title, "Title");
        assert_eq!(note.tags, vec!["a", "b"]);
        assert_eq!(note.body, "line one\n\nline two\n");
    }

    #[test]
    fn test_parse_without_tags_line() {
        let note = parse("# Title\n\nbody").unwrap();
        assert!(note.tags.is_empty());
        assert_eq!(note.body, "body");
    }

    #[test]
    fn test_parse_empty_tags_and_body() {
        let note = parse("# Title\nTags: \n\n").unwrap();
        assert!(note.tags.is_empty());
        assert_eq!(note.body, "");
    }

    #[test]
    fn test_parse_header_only() {
        let note = parse("# Title\nTags: x").unwrap();
        assert_eq!(note.tags, vec!["x"]);
        assert_eq!(note.body, "");
    }

    #[test]
    fn test_parse_crlf_header() {
        let note = parse("# Title\r\nTags: a\r\n\r\nbody\r\n").unwrap();
        assert_eq!(note.title, "Title");
        assert_eq!(note.tags, vec!["a"]);
        assert_eq!(note.body, "body\r\n");
    }

    #[test]
    fn test_missing_title_is_corrupt() {
        let err = parse("Title\nTags: a\n\nbody").unwrap_err();
        assert!(matches!(err, NoteError::CorruptNote { .. }));
    }

    #[test]
    fn test_missing_separator_is_corrupt() {
        let err = parse("# Title\nTags: a\nbody").unwrap_err();
        assert!(matches!(err, NoteError::CorruptNote { .. }));
    }

    #[test]
    fn test_rewrite_tags_preserves_title_and_body() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.md");
        let body = "keep\n  exact   spacing\n\nTags: not a header\n";
        NoteFile::new("Keep Me", vec!["old".to_string()], body)
            .write(&path)
            .unwrap();

        NoteFile::rewrite_tags(&path, vec!["new".to_string(), "more".to_string()]).unwrap();

        let reread = NoteFile::read(&path).unwrap();
        assert_eq!(reread.title, "Keep Me");
        assert_eq!(reread.tags, vec!["new", "more"]);
        assert_eq!(reread.body, body);
    }
}
