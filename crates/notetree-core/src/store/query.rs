//! Read-only note operations

use crate::error::Result;
use crate::note::{Note, NoteFile, NoteListing};

use super::paths::NotePath;
use super::NoteRepository;

impl NoteRepository {
    /// Resolve an identifier to an existing note path.
    ///
    /// Bare titles are looked up in the root index, or in the children index
    /// of `parent` when one is given.
    pub fn resolve(&self, ident: &str, parent: Option<&str>) -> Result<NotePath> {
        let _guard = self.lock.read();
        self.resolve_unlocked(ident, parent)
    }

    pub(super) fn resolve_unlocked(&self, ident: &str, parent: Option<&str>) -> Result<NotePath> {
        let scope = self.folder_for(parent)?;
        self.resolver.resolve(ident, &scope, &self.indexes)
    }

    /// Get a note by path, filename or top-level title
    #[tracing::instrument(skip(self))]
    pub fn get(&self, ident: &str) -> Result<Note> {
        let _guard = self.lock.read();
        let path = self.resolve_unlocked(ident, None)?;
        self.read_note(&path)
    }

    pub(super) fn read_note(&self, path: &NotePath) -> Result<Note> {
        let file = NoteFile::read(&path.to_fs(&self.root))?;
        Ok(Note::from_file(path.clone(), file))
    }

    /// List the notes directly inside `parent`'s children directory, or the
    /// top-level notes. Never descends further.
    #[tracing::instrument(skip(self))]
    pub fn list(&self, parent: Option<&str>) -> Result<Vec<NoteListing>> {
        let _guard = self.lock.read();
        let dir = self.folder_for(parent)?;

        let index = self.indexes.load(&dir)?;
        let mut listings: Vec<NoteListing> = index
            .iter()
            .map(|(title, record)| NoteListing {
                path: NotePath::new(record.filename.as_str()),
                title: title.clone(),
                tags: record.tags.clone(),
                children_count: record.children_count,
                descendant_count: record.descendant_count,
            })
            .collect();
        listings.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(listings)
    }
}
