use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{NoteError, Result};

/// Write `content` to `path` by filling a temp file in the same directory and
/// renaming it over the target. Readers see either the old or the new file.
pub(crate) fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| NoteError::io_operation("write", path.display(), "no parent directory"))?;
    fs::create_dir_all(parent)?;

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(content)?;
    temp_file.as_file().sync_all()?;
    temp_file
        .persist(path)
        .map_err(|e| NoteError::io_operation("persist", path.display(), e))?;

    Ok(())
}

/// True when `dir` exists and holds no entries at all
pub(crate) fn is_empty_dir(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(dir)?.next().is_none())
}

/// Remove `dir` and then each parent while they are empty, never touching
/// `root` itself.
pub(crate) fn prune_empty_dirs(root: &Path, dir: &Path) -> Result<()> {
    let mut current = dir.to_path_buf();
    while current != root && current.starts_with(root) && is_empty_dir(&current)? {
        fs::remove_dir(&current)?;
        tracing::debug!(dir = %current.display(), "removed empty directory");
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }
    Ok(())
}
