//! Children and descendant counts
//!
//! A note with sub-notes carries `children-count` (direct sub-notes) and
//! `descendant-count` (children plus every child's own descendant count) in
//! its directory's index. Counts are recomputed from the children directory's
//! index, deepest level first, so every level reads already-correct values.

use super::index::IndexStore;
use super::paths::{parent_of, NotePath};
use crate::error::Result;

pub struct CountMaintainer<'a> {
    indexes: &'a IndexStore,
}

impl<'a> CountMaintainer<'a> {
    pub fn new(indexes: &'a IndexStore) -> Self {
        CountMaintainer { indexes }
    }

    /// Counts for the note owning `children_dir`, or `None` when that
    /// directory lists no notes.
    pub fn counts_for(&self, children_dir: &str) -> Result<Option<(usize, usize)>> {
        let index = self.indexes.load(children_dir)?;
        if index.is_empty() {
            return Ok(None);
        }
        let children = index.len();
        let nested: usize = index
            .iter()
            .map(|(_, record)| record.descendant_count.unwrap_or(0))
            .sum();
        Ok(Some((children, children + nested)))
    }

    /// Recompute counts for every note listed in `dir`. Saves only on change.
    pub fn recount(&self, dir: &str) -> Result<bool> {
        let mut index = self.indexes.load(dir)?;
        let mut changed = false;

        for (_, record) in index.iter_mut() {
            let children_dir = NotePath::new(record.filename.as_str())
                .children_dir()
                .to_string();
            let (children, descendants) = match self.counts_for(&children_dir)? {
                Some((c, d)) => (Some(c), Some(d)),
                None => (None, None),
            };
            if record.children_count != children || record.descendant_count != descendants {
                record.children_count = children;
                record.descendant_count = descendants;
                changed = true;
            }
        }

        if changed {
            self.indexes.save(dir, &index)?;
        }
        Ok(changed)
    }

    /// Refresh counts on every ancestor of `dir` after its contents changed.
    ///
    /// Walks upward one directory at a time, recounting the index that lists
    /// the note owning the level below.
    #[tracing::instrument(skip(self))]
    pub fn propagate(&self, dir: &str) -> Result<()> {
        let mut current = dir;
        while !current.is_empty() {
            let parent = parent_of(current);
            if self.recount(parent)? {
                tracing::debug!(dir = parent, "counts updated");
            }
            current = parent;
        }
        Ok(())
    }
}
