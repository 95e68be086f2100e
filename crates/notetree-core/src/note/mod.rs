//! Note model for notetree
//!
//! A note is a titled, tagged text document persisted as one file. The
//! on-disk layout lives in [`file`]; the types here are what the repository
//! hands back to callers.

pub mod file;

use serde::Serialize;

use crate::error::Result;
use crate::store::paths::NotePath;

pub use file::NoteFile;

/// A note read from disk, addressed by its root-relative path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub path: NotePath,
    pub title: String,
    pub tags: Vec<String>,
    pub body: String,
}

impl Note {
    pub(crate) fn from_file(path: NotePath, file: NoteFile) -> Self {
        Note {
            path,
            title: file.title,
            tags: file.tags,
            body: file.body,
        }
    }

    /// The exact text this note is stored as
    pub fn to_text(&self) -> String {
        file::render(&self.title, &self.tags, &self.body)
    }
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListing {
    pub path: NotePath,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(rename = "children-count", skip_serializing_if = "Option::is_none")]
    pub children_count: Option<usize>,
    #[serde(rename = "descendant-count", skip_serializing_if = "Option::is_none")]
    pub descendant_count: Option<usize>,
}

/// Normalize a caller-supplied tag list.
///
/// Tags are trimmed and de-duplicated, keeping the first occurrence. Tags that
/// cannot survive the comma-separated tags line are rejected.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || tag.contains([',', '\n', '\r']) {
            crate::bail_invalid!("tag", format!("{:?}", tag));
        }
        if !normalized.iter().any(|t| t == tag) {
            normalized.push(tag.to_string());
        }
    }
    Ok(normalized)
}

/// Validate a note title: non-empty and on a single line.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() || title.contains(['\n', '\r']) {
        crate::bail_invalid!("title", format!("{:?}", title));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteError;

    #[test]
    fn test_normalize_tags_dedups_and_trims() {
        let tags = normalize_tags(&[" work ", "x", "work", "y"]).unwrap();
        assert_eq!(tags, vec!["work", "x", "y"]);
    }

    #[test]
    fn test_normalize_tags_rejects_commas() {
        let err = normalize_tags(&["a,b"]).unwrap_err();
        assert!(matches!(err, NoteError::InvalidValue { .. }));
    }

    #[test]
    fn test_normalize_tags_rejects_blank() {
        assert!(normalize_tags(&["   "]).is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Project Alpha").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("two\nlines").is_err());
    }

    #[test]
    fn test_listing_omits_absent_counts() {
        let listing = NoteListing {
            path: NotePath::new("tasks.md"),
            title: "Tasks".to_string(),
            tags: vec![],
            children_count: None,
            descendant_count: None,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.get("children-count").is_none());
        assert_eq!(json["path"], "tasks.md");
    }
}
