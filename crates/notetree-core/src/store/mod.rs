//! Note repository for notetree
//!
//! The storage root holds top-level note files, the root index and one
//! subdirectory per note that has sub-notes. Every public operation goes
//! through [`NoteRepository`], which keeps the file tree, the per-directory
//! indexes and the recursive counts consistent.
//!
//! The whole root is guarded by one reader/writer lock: `get`, `list` and
//! `resolve` share it, every mutation holds it exclusively until done.

pub mod counts;
pub mod index;
pub(crate) mod io;
mod lifecycle;
pub mod paths;
mod query;
pub mod references;
mod tags;

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::config::StoreConfig;
use crate::error::{NoteError, Result};
use counts::CountMaintainer;
use index::IndexStore;
use paths::PathResolver;
use references::ReferenceRewriter;

/// The notetree note repository
#[derive(Debug)]
pub struct NoteRepository {
    /// Root path of the store
    root: PathBuf,
    /// Store configuration
    config: StoreConfig,
    resolver: PathResolver,
    indexes: IndexStore,
    /// Serializes mutations against the whole tree
    lock: RwLock<()>,
}

impl NoteRepository {
    /// Open the store at `root`, creating the directory if needed
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if root.exists() && !root.is_dir() {
            return Err(NoteError::InvalidStore {
                reason: format!("{} is not a directory", root.display()),
            });
        }
        fs::create_dir_all(root)?;
        let config = StoreConfig::load_or_default(root)?;
        Ok(Self::with_config(root, config))
    }

    /// Open the store at `root` with an explicit configuration
    pub fn with_config(root: &Path, config: StoreConfig) -> Self {
        let root = root.to_path_buf();
        NoteRepository {
            resolver: PathResolver::new(&root, &config.extension, config.max_suffix),
            indexes: IndexStore::new(&root, &config.index_file),
            root,
            config,
            lock: RwLock::new(()),
        }
    }

    /// Get the store root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the config
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn indexes(&self) -> &IndexStore {
        &self.indexes
    }

    fn counts(&self) -> CountMaintainer<'_> {
        CountMaintainer::new(&self.indexes)
    }

    fn references(&self) -> ReferenceRewriter<'_> {
        ReferenceRewriter::new(&self.root, &self.indexes, self.config.reference_boundaries)
    }
}
