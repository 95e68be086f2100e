//! Structural note operations: add, delete and move
//!
//! Each of these changes the shape of the tree, so each ends by refreshing
//! the counts on every affected ancestor chain.

use std::fs;
use std::time::Instant;

use crate::error::{NoteError, Result};
use crate::note::{normalize_tags, validate_title, NoteFile};

use super::index::IndexRecord;
use super::io::prune_empty_dirs;
use super::paths::{dir_to_fs, slugify, NotePath};
use super::NoteRepository;

/// Human-readable name for a root-relative directory
fn display_dir(dir: &str) -> &str {
    if dir.is_empty() {
        "<root>"
    } else {
        dir
    }
}

impl NoteRepository {
    /// Directory that holds the notes listed under `parent` (the root if `None`)
    pub(super) fn folder_for(&self, parent: Option<&str>) -> Result<String> {
        match parent {
            Some(parent) => self.resolver.resolve_folder(parent, &self.indexes),
            None => Ok(String::new()),
        }
    }

    /// Create a note, top-level or under `parent`, and return its path.
    ///
    /// The title is trimmed and the filename derived from it. Titles key the
    /// directory index, so adding a title that already exists in the target
    /// directory fails with [`NoteError::AlreadyExists`] instead of creating
    /// `title_1.md`. The `_N` suffix only separates distinct titles that
    /// slugify to the same filename ("Report" and "Report!").
    #[tracing::instrument(skip(self, content, tags))]
    pub fn add<S: AsRef<str>>(
        &self,
        title: &str,
        content: &str,
        tags: &[S],
        parent: Option<&str>,
    ) -> Result<NotePath> {
        let start = Instant::now();
        validate_title(title)?;
        let title = title.trim();
        let tags = normalize_tags(tags)?;

        let _guard = self.lock.write();
        let dir = self.folder_for(parent)?;

        let mut index = self.indexes.load(&dir)?;
        if index.contains_title(title) {
            return Err(NoteError::already_exists(
                "note title",
                format!("'{}' in {}", title, display_dir(&dir)),
            ));
        }

        let stem = self.resolver.unique_stem(&dir, &slugify(title), &index)?;
        let path = self.resolver.note_path(&dir, &stem);

        NoteFile::new(title, tags.clone(), content).write(&path.to_fs(&self.root))?;
        index.insert(title, IndexRecord::new(path.as_str(), tags));
        self.indexes.save(&dir, &index)?;
        self.counts().propagate(&dir)?;

        tracing::debug!(path = %path, "note added");
        crate::trace_time!(start, "add");
        Ok(path)
    }

    /// Delete a note together with every sub-note below it.
    ///
    /// Directories left empty are removed, walking upward.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, ident: &str) -> Result<()> {
        let start = Instant::now();
        let _guard = self.lock.write();
        let path = self.resolve_unlocked(ident, None)?;
        let dir = path.parent_dir().to_string();

        let mut index = self.indexes.load(&dir)?;
        if index.remove_by_path(path.as_str()).is_none() {
            tracing::warn!(path = %path, "deleted note had no index entry");
        }
        self.indexes.save(&dir, &index)?;

        fs::remove_file(path.to_fs(&self.root))?;
        let children = dir_to_fs(&self.root, path.children_dir());
        if children.is_dir() {
            fs::remove_dir_all(&children)?;
            tracing::debug!(dir = path.children_dir(), "removed sub-notes");
        }

        prune_empty_dirs(&self.root, &dir_to_fs(&self.root, &dir))?;
        self.counts().propagate(&dir)?;

        tracing::debug!(path = %path, "note deleted");
        crate::trace_time!(start, "delete");
        Ok(())
    }

    /// Move a note, with its sub-notes, under `target` (the root if `None`).
    ///
    /// The filename is kept unless it collides in the destination. References
    /// to the old location in other notes are rewritten. Returns the new path;
    /// moving into the current directory changes nothing.
    #[tracing::instrument(skip(self))]
    pub fn move_note(&self, ident: &str, target: Option<&str>) -> Result<NotePath> {
        let start = Instant::now();
        let _guard = self.lock.write();
        let old = self.resolve_unlocked(ident, None)?;
        let old_dir = old.parent_dir().to_string();
        let dest_dir = self.folder_for(target)?;

        if dest_dir == old_dir {
            return Ok(old);
        }
        let subtree = old.children_dir();
        if dest_dir == subtree || dest_dir.starts_with(&format!("{}/", subtree)) {
            crate::bail_invalid!(
                "move target",
                format!("{} is inside {}", display_dir(&dest_dir), old)
            );
        }

        let note = NoteFile::read(&old.to_fs(&self.root))?;
        let mut dest_index = self.indexes.load(&dest_dir)?;
        if dest_index.contains_title(&note.title) {
            return Err(NoteError::already_exists(
                "note title",
                format!("'{}' in {}", note.title, display_dir(&dest_dir)),
            ));
        }

        let stem = self
            .resolver
            .unique_stem(&dest_dir, old.file_stem(), &dest_index)?;
        let new = self.resolver.note_path(&dest_dir, &stem);

        self.relocate(&old, &new)?;

        let mut old_index = self.indexes.load(&old_dir)?;
        let mut record = old_index
            .remove_by_path(old.as_str())
            .map(|(_, record)| record)
            .unwrap_or_else(|| IndexRecord::new(old.as_str(), note.tags.clone()));
        self.indexes.save(&old_dir, &old_index)?;

        record.filename = new.to_string();
        dest_index.insert(note.title.clone(), record);
        self.indexes.save(&dest_dir, &dest_index)?;

        prune_empty_dirs(&self.root, &dir_to_fs(&self.root, &old_dir))?;
        // Both chains may share ancestors; the second walk settles them.
        self.counts().propagate(&old_dir)?;
        self.counts().propagate(&dest_dir)?;

        let rewritten = self.references().rewrite(&old, &new)?;
        tracing::debug!(old = %old, new = %new, rewritten, "note moved");
        crate::trace_time!(start, "move");
        Ok(new)
    }

    /// Move the note file and its children directory on disk
    fn relocate(&self, old: &NotePath, new: &NotePath) -> Result<()> {
        let new_file = new.to_fs(&self.root);
        if let Some(parent) = new_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(old.to_fs(&self.root), &new_file)?;

        let old_children = dir_to_fs(&self.root, old.children_dir());
        if old_children.is_dir() {
            fs::rename(&old_children, dir_to_fs(&self.root, new.children_dir()))?;
            self.indexes
                .rewrite_prefix(new.children_dir(), old.children_dir(), new.children_dir())?;
        }
        Ok(())
    }
}
