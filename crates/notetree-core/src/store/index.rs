//! Per-directory metadata index
//!
//! Each directory holding notes owns one JSON index mapping note titles to
//! their path, tags and (for notes with sub-notes) their children and
//! descendant counts. An index only ever lists the notes directly inside its
//! directory.

use std::collections::btree_map::{self, BTreeMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::io::atomic_write;
use super::paths::dir_to_fs;
use crate::error::Result;

/// Metadata cached for one note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Root-relative note path
    pub filename: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        rename = "children-count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub children_count: Option<usize>,
    #[serde(
        rename = "descendant-count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub descendant_count: Option<usize>,
}

impl IndexRecord {
    pub fn new(filename: impl Into<String>, tags: Vec<String>) -> Self {
        IndexRecord {
            filename: filename.into(),
            tags,
            children_count: None,
            descendant_count: None,
        }
    }
}

/// Title-keyed index of one directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirIndex {
    entries: BTreeMap<String, IndexRecord>,
}

impl DirIndex {
    pub fn get(&self, title: &str) -> Option<&IndexRecord> {
        self.entries.get(title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    pub fn insert(&mut self, title: impl Into<String>, record: IndexRecord) -> Option<IndexRecord> {
        self.entries.insert(title.into(), record)
    }

    /// Find the record pointing at `path`, with its title
    pub fn find_by_path(&self, path: &str) -> Option<(&str, &IndexRecord)> {
        self.entries
            .iter()
            .find(|(_, record)| record.filename == path)
            .map(|(title, record)| (title.as_str(), record))
    }

    pub fn find_by_path_mut(&mut self, path: &str) -> Option<&mut IndexRecord> {
        self.entries
            .values_mut()
            .find(|record| record.filename == path)
    }

    /// Remove every record pointing at `path`, returning the first one
    pub fn remove_by_path(&mut self, path: &str) -> Option<(String, IndexRecord)> {
        let titles: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, record)| record.filename == path)
            .map(|(title, _)| title.clone())
            .collect();
        let mut removed = None;
        for title in titles {
            if let Some(record) = self.entries.remove(&title) {
                removed.get_or_insert((title, record));
            }
        }
        removed
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, IndexRecord> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, IndexRecord> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads and saves [`DirIndex`] files, one per directory
#[derive(Debug, Clone)]
pub struct IndexStore {
    root: PathBuf,
    file_name: String,
}

impl IndexStore {
    pub fn new(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        IndexStore {
            root: root.into(),
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Location of the index file for a root-relative directory
    pub fn index_path(&self, dir: &str) -> PathBuf {
        dir_to_fs(&self.root, dir).join(&self.file_name)
    }

    /// Load a directory's index; a missing file is an empty index.
    pub fn load(&self, dir: &str) -> Result<DirIndex> {
        load_file(&self.index_path(dir))
    }

    /// Persist a directory's index. An empty index deletes the file.
    pub fn save(&self, dir: &str, index: &DirIndex) -> Result<()> {
        save_file(&self.index_path(dir), index)
    }

    /// Every indexed note path in the tree, directory by directory
    pub fn indexed_paths(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() || entry.file_name() != self.file_name.as_str() {
                continue;
            }
            let index = load_file(entry.path())?;
            paths.extend(index.iter().map(|(_, record)| record.filename.clone()));
        }
        Ok(paths)
    }

    /// Rewrite `filename` prefixes in every index at or below `dir`.
    ///
    /// Used after a subtree moved from `old_prefix/` to `new_prefix/`.
    pub fn rewrite_prefix(&self, dir: &str, old_prefix: &str, new_prefix: &str) -> Result<usize> {
        let base = dir_to_fs(&self.root, dir);
        if !base.is_dir() {
            return Ok(0);
        }

        let old = format!("{}/", old_prefix);
        let new = format!("{}/", new_prefix);
        let mut rewritten = 0;

        for entry in WalkDir::new(&base).into_iter() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() || entry.file_name() != self.file_name.as_str() {
                continue;
            }

            let mut index = load_file(entry.path())?;
            for (_, record) in index.iter_mut() {
                if let Some(rest) = record.filename.strip_prefix(&old) {
                    record.filename = format!("{}{}", new, rest);
                }
            }
            save_file(entry.path(), &index)?;
            rewritten += 1;
        }

        Ok(rewritten)
    }
}

fn load_file(path: &Path) -> Result<DirIndex> {
    if !path.is_file() {
        return Ok(DirIndex::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn save_file(path: &Path, index: &DirIndex) -> Result<()> {
    if index.is_empty() {
        if path.is_file() {
            fs::remove_file(path)?;
        }
        return Ok(());
    }
    let content = serde_json::to_string_pretty(index)?;
    atomic_write(path, content.as_bytes())
}
