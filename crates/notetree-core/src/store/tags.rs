//! Content and tag updates
//!
//! These never change the shape of the tree: only the note file and the tags
//! cached in its directory's index are touched.

use crate::error::Result;
use crate::note::{normalize_tags, NoteFile};

use super::index::IndexRecord;
use super::paths::NotePath;
use super::NoteRepository;

impl NoteRepository {
    /// Replace a note's body and tags, keeping its title.
    ///
    /// An empty `tags` slice clears the note's tags.
    #[tracing::instrument(skip(self, content, tags))]
    pub fn update<S: AsRef<str>>(&self, ident: &str, content: &str, tags: &[S]) -> Result<NotePath> {
        let tags = normalize_tags(tags)?;
        let _guard = self.lock.write();
        let path = self.resolve_unlocked(ident, None)?;
        let fs_path = path.to_fs(&self.root);

        let mut note = NoteFile::read(&fs_path)?;
        note.body = content.to_string();
        note.tags = tags;
        note.write(&fs_path)?;

        self.sync_index_entry(&path, &note)?;
        Ok(path)
    }

    /// Add tags to a note, skipping ones it already has. Returns the new tag list.
    #[tracing::instrument(skip(self, tags))]
    pub fn add_tags<S: AsRef<str>>(&self, ident: &str, tags: &[S]) -> Result<Vec<String>> {
        let additions = normalize_tags(tags)?;
        let _guard = self.lock.write();
        let path = self.resolve_unlocked(ident, None)?;
        let fs_path = path.to_fs(&self.root);

        let current = NoteFile::read(&fs_path)?.tags;
        let mut merged = current.clone();
        for tag in additions {
            if !merged.contains(&tag) {
                merged.push(tag);
            }
        }
        if merged == current {
            return Ok(current);
        }

        let note = NoteFile::rewrite_tags(&fs_path, merged)?;
        self.sync_index_entry(&path, &note)?;
        Ok(note.tags)
    }

    /// Remove tags from a note. Tags it does not have are ignored.
    #[tracing::instrument(skip(self, tags))]
    pub fn remove_tags<S: AsRef<str>>(&self, ident: &str, tags: &[S]) -> Result<Vec<String>> {
        let removals: Vec<&str> = tags.iter().map(|t| t.as_ref().trim()).collect();
        let _guard = self.lock.write();
        let path = self.resolve_unlocked(ident, None)?;
        let fs_path = path.to_fs(&self.root);

        let current = NoteFile::read(&fs_path)?.tags;
        let remaining: Vec<String> = current
            .iter()
            .filter(|tag| !removals.contains(&tag.as_str()))
            .cloned()
            .collect();
        if remaining.len() == current.len() {
            return Ok(current);
        }

        let note = NoteFile::rewrite_tags(&fs_path, remaining)?;
        self.sync_index_entry(&path, &note)?;
        Ok(note.tags)
    }

    /// Copy a note's tags into its directory's index record
    fn sync_index_entry(&self, path: &NotePath, note: &NoteFile) -> Result<()> {
        let dir = path.parent_dir();
        let mut index = self.indexes.load(dir)?;
        let missing = match index.find_by_path_mut(path.as_str()) {
            Some(record) => {
                record.tags = note.tags.clone();
                false
            }
            None => {
                tracing::warn!(path = %path, "note missing from index, re-adding");
                index.insert(
                    note.title.clone(),
                    IndexRecord::new(path.as_str(), note.tags.clone()),
                );
                true
            }
        };
        self.indexes.save(dir, &index)?;
        if missing {
            self.counts().recount(dir)?;
        }
        Ok(())
    }
}
