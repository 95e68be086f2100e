//! Textual reference rewriting after a move
//!
//! References between notes are plain text: any occurrence of a note's path
//! in another note's body or tags. When a note moves, every indexed note in
//! the tree is scanned and occurrences of the old path are replaced with the new one.
//! If the note owned sub-notes, the old children-directory prefix (`old/`) is
//! replaced as well, which covers references to every moved descendant.
//!
//! With boundary matching on, an occurrence preceded by a path character is
//! left alone, so `archive/b.md` is never mistaken for a reference to `b.md`.
//! A relative `./b.md` still counts. Files without an index record are not
//! notes and are never touched.

use std::borrow::Cow;
use std::path::Path;

use regex::{Captures, Regex};

use super::index::IndexStore;
use super::paths::{dir_to_fs, NotePath};
use crate::error::{NoteError, Result};
use crate::note::NoteFile;

/// A compiled old-path to new-path substitution
struct Replacement {
    pattern: Regex,
    to: String,
}

impl Replacement {
    /// Build the matcher for `from`.
    ///
    /// With boundaries on, the match must not follow a path character
    /// (`\w . / -`), except for a leading `./` which is kept. When `whole` is
    /// set and `from` ends in a word character, the match must also end at a
    /// word boundary.
    fn new(from: &str, to: &str, whole: bool, boundaries: bool) -> Result<Self> {
        let escaped = regex::escape(from);
        let pattern = if boundaries {
            let tail = if whole && from.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
                r"\b"
            } else {
                ""
            };
            format!(r"(?P<pre>^|[^\w./-])(?P<dot>\./)?{}{}", escaped, tail)
        } else {
            escaped
        };
        let pattern = Regex::new(&pattern)
            .map_err(|e| NoteError::Other(format!("reference pattern for {:?}: {}", from, e)))?;
        Ok(Replacement {
            pattern,
            to: to.to_string(),
        })
    }

    /// Rewritten text, or `None` when nothing matched
    fn apply(&self, text: &str) -> Option<String> {
        let replaced = self.pattern.replace_all(text, |caps: &Captures| {
            let pre = caps.name("pre").map_or("", |m| m.as_str());
            let dot = caps.name("dot").map_or("", |m| m.as_str());
            format!("{}{}{}", pre, dot, self.to)
        });
        match replaced {
            Cow::Borrowed(_) => None,
            Cow::Owned(text) => Some(text),
        }
    }
}

pub struct ReferenceRewriter<'a> {
    root: &'a Path,
    indexes: &'a IndexStore,
    boundaries: bool,
}

impl<'a> ReferenceRewriter<'a> {
    pub fn new(root: &'a Path, indexes: &'a IndexStore, boundaries: bool) -> Self {
        ReferenceRewriter {
            root,
            indexes,
            boundaries,
        }
    }

    /// Replace references to `old` with `new` in every note of the tree.
    ///
    /// Must run after the move itself, so the scan sees the final layout.
    /// Returns the number of notes that were rewritten.
    #[tracing::instrument(skip(self, old, new), fields(old = %old, new = %new))]
    pub fn rewrite(&self, old: &NotePath, new: &NotePath) -> Result<usize> {
        let mut rules = vec![Replacement::new(
            old.as_str(),
            new.as_str(),
            true,
            self.boundaries,
        )?];
        if dir_to_fs(self.root, new.children_dir()).is_dir() {
            rules.push(Replacement::new(
                &format!("{}/", old.children_dir()),
                &format!("{}/", new.children_dir()),
                false,
                self.boundaries,
            )?);
        }

        let mut rewritten = 0;
        for path in self.indexes.indexed_paths()? {
            let path = NotePath::new(path);
            if !path.to_fs(self.root).is_file() {
                tracing::warn!(note = %path, "indexed note file is missing");
                continue;
            }
            if self.rewrite_note(&path, &rules)? {
                tracing::debug!(note = %path, "rewrote references");
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }

    fn rewrite_note(&self, path: &NotePath, rules: &[Replacement]) -> Result<bool> {
        let fs_path = path.to_fs(self.root);
        let mut note = NoteFile::read(&fs_path)?;
        let mut body_changed = false;
        let mut tags_changed = false;

        for rule in rules {
            if let Some(body) = rule.apply(&note.body) {
                note.body = body;
                body_changed = true;
            }
            for tag in note.tags.iter_mut() {
                if let Some(replaced) = rule.apply(tag) {
                    *tag = replaced;
                    tags_changed = true;
                }
            }
        }

        if !body_changed && !tags_changed {
            return Ok(false);
        }
        note.write(&fs_path)?;

        if tags_changed {
            let dir = path.parent_dir();
            let mut index = self.indexes.load(dir)?;
            if let Some(record) = index.find_by_path_mut(path.as_str()) {
                record.tags = note.tags.clone();
                self.indexes.save(dir, &index)?;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(from: &str, to: &str, whole: bool) -> Replacement {
        Replacement::new(from, to, whole, true).unwrap()
    }

    #[test]
    fn test_replaces_quoted_reference() {
        let out = rule("b.md", "archive/b.md", true).apply("see \"b.md\" for details");
        assert_eq!(out.as_deref(), Some("see \"archive/b.md\" for details"));
    }

    #[test]
    fn test_boundaries_skip_longer_paths() {
        let r = rule("b.md", "archive/b.md", true);
        assert_eq!(r.apply("archive/b.md"), None);
        assert_eq!(r.apply("sub_b.md"), None);
        assert_eq!(r.apply("sub-b.md"), None);
        assert_eq!(r.apply("b.mdx"), None);
        assert_eq!(r.apply("x/./b.md"), None);
    }

    #[test]
    fn test_boundaries_allow_markdown_links() {
        let r = rule("b.md", "archive/b.md", true);
        assert_eq!(
            r.apply("[B](b.md) and b.md.").as_deref(),
            Some("[B](archive/b.md) and archive/b.md.")
        );
    }

    #[test]
    fn test_dot_slash_link_keeps_prefix() {
        let r = rule("b.md", "archive/b.md", true);
        assert_eq!(
            r.apply("[B](./b.md)").as_deref(),
            Some("[B](./archive/b.md)")
        );
        assert_eq!(r.apply("./b.md").as_deref(), Some("./archive/b.md"));
    }

    #[test]
    fn test_adjacent_references() {
        let r = rule("b.md", "archive/b.md", true);
        assert_eq!(
            r.apply("b.md,b.md b.md").as_deref(),
            Some("archive/b.md,archive/b.md archive/b.md")
        );
    }

    #[test]
    fn test_rewritten_text_is_stable() {
        let r = rule("b.md", "archive/b.md", true);
        let once = r.apply("see b.md").unwrap();
        assert_eq!(r.apply(&once), None);
    }

    #[test]
    fn test_escapes_regex_metacharacters() {
        let r = rule("c++ (draft).md", "x/c++ (draft).md", true);
        assert_eq!(r.apply("cxx (draft)amd"), None);
        assert_eq!(
            r.apply("see c++ (draft).md").as_deref(),
            Some("see x/c++ (draft).md")
        );
    }

    #[test]
    fn test_plain_substring_mode() {
        let r = Replacement::new("b.md", "archive/b.md", true, false).unwrap();
        assert_eq!(r.apply("sub_b.md").as_deref(), Some("sub_archive/b.md"));
    }

    #[test]
    fn test_directory_prefix_rule() {
        let r = rule("proj/", "archive/proj/", false);
        assert_eq!(
            r.apply("see proj/tasks.md").as_deref(),
            Some("see archive/proj/tasks.md")
        );
        assert_eq!(r.apply("see subproj/tasks.md"), None);
    }
}
