//! Path resolution for notes
//!
//! Every note is addressed by a [`NotePath`]: a slash-separated path relative
//! to the storage root that ends in the note extension (`parent/child.md`).
//! A note's children live in the directory named after its path with the
//! extension stripped (`parent/child/`). Directories are passed around as
//! root-relative strings, with `""` standing for the root itself.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::index::{DirIndex, IndexStore};
use crate::error::{NoteError, Result};

/// Fallback filename stem for titles that slugify to nothing
const UNTITLED_STEM: &str = "untitled";

/// Root-relative path of a note file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotePath(String);

impl NotePath {
    pub fn new(path: impl Into<String>) -> Self {
        let path: String = path.into();
        NotePath(path.trim_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path component, extension included
    pub fn file_name(&self) -> &str {
        self.0.rsplit_once('/').map_or(self.0.as_str(), |(_, name)| name)
    }

    /// The path with its extension stripped (`a/b.md` -> `a/b`)
    pub fn stem(&self) -> &str {
        let name_start = self.0.len() - self.file_name().len();
        match self.file_name().rfind('.') {
            Some(dot) if dot > 0 => &self.0[..name_start + dot],
            _ => &self.0,
        }
    }

    /// Final component of [`NotePath::stem`]
    pub fn file_stem(&self) -> &str {
        let stem = self.stem();
        stem.rsplit_once('/').map_or(stem, |(_, name)| name)
    }

    /// Directory holding this note's sub-notes
    pub fn children_dir(&self) -> &str {
        self.stem()
    }

    /// Directory holding this note (`""` for top-level notes)
    pub fn parent_dir(&self) -> &str {
        self.0.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// Absolute filesystem location under `root`
    pub fn to_fs(&self, root: &Path) -> PathBuf {
        dir_to_fs(root, &self.0)
    }
}

impl fmt::Display for NotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NotePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Join a root-relative directory and a name
pub fn join_dir(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Parent of a root-relative directory (`""` for top-level directories)
pub fn parent_of(dir: &str) -> &str {
    dir.rsplit_once('/').map_or("", |(parent, _)| parent)
}

/// Filesystem location of a root-relative directory or file
pub fn dir_to_fs(root: &Path, dir: &str) -> PathBuf {
    dir.split('/')
        .filter(|c| !c.is_empty())
        .fold(root.to_path_buf(), |path, component| path.join(component))
}

/// Derive a filename stem from a title.
///
/// Lower-cases, transliterates to ASCII and collapses every run of whitespace
/// or punctuation into a single underscore.
pub fn slugify(title: &str) -> String {
    let slug = slug::slugify(title).replace('-', "_");
    if slug.is_empty() {
        UNTITLED_STEM.to_string()
    } else {
        slug
    }
}

/// Trim an identifier and reject anything that could escape the root.
fn clean_ident(ident: &str) -> Result<&str> {
    let cleaned = ident.trim();
    let cleaned = cleaned.strip_prefix("./").unwrap_or(cleaned).trim_matches('/');
    if cleaned.is_empty() {
        crate::bail_invalid!("note path", format!("{:?}", ident));
    }
    if cleaned
        .split('/')
        .any(|c| c.is_empty() || c == "." || c == ".." || c.contains('\\'))
    {
        crate::bail_invalid!("note path", ident);
    }
    Ok(cleaned)
}

/// Maps titles and loose identifiers to canonical [`NotePath`]s
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    extension: String,
    max_suffix: u32,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>, max_suffix: u32) -> Self {
        PathResolver {
            root: root.into(),
            extension: extension.into(),
            max_suffix,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Append the note extension unless it is already present
    pub fn with_extension(&self, ident: &str) -> String {
        if self.has_extension(ident) {
            ident.to_string()
        } else {
            format!("{}.{}", ident, self.extension)
        }
    }

    /// Strip the note extension if present
    pub fn strip_extension<'a>(&self, ident: &'a str) -> &'a str {
        ident
            .strip_suffix(self.extension.as_str())
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(ident)
    }

    pub fn has_extension(&self, ident: &str) -> bool {
        self.strip_extension(ident).len() != ident.len()
    }

    /// Path of the note with filename stem `stem` inside `dir`
    pub fn note_path(&self, dir: &str, stem: &str) -> NotePath {
        NotePath::new(join_dir(dir, &self.with_extension(stem)))
    }

    /// True when `path` names an existing note file
    pub fn is_note(&self, path: &NotePath) -> bool {
        self.has_extension(path.as_str()) && path.to_fs(&self.root).is_file()
    }

    /// First free stem among `base`, `base_1`, `base_2`, ... inside `dir`.
    ///
    /// A candidate is taken when a note file, a children directory or an index
    /// record already uses it.
    pub fn unique_stem(&self, dir: &str, base: &str, index: &DirIndex) -> Result<String> {
        for attempt in 0..=self.max_suffix {
            let candidate = if attempt == 0 {
                base.to_string()
            } else {
                format!("{}_{}", base, attempt)
            };
            if !self.is_taken(dir, &candidate, index) {
                return Ok(candidate);
            }
        }
        Err(NoteError::Collision {
            stem: join_dir(dir, base),
            attempts: self.max_suffix + 1,
        })
    }

    fn is_taken(&self, dir: &str, stem: &str, index: &DirIndex) -> bool {
        let note = self.note_path(dir, stem);
        note.to_fs(&self.root).exists()
            || dir_to_fs(&self.root, note.stem()).exists()
            || index.find_by_path(note.as_str()).is_some()
    }

    /// Resolve an identifier to an existing note.
    ///
    /// Identifiers containing `/` are root-relative paths. Bare identifiers are
    /// looked up as a title in `scope_dir`'s index, then as a filename inside
    /// `scope_dir`; they never reach below that directory.
    pub fn resolve(&self, ident: &str, scope_dir: &str, indexes: &IndexStore) -> Result<NotePath> {
        let ident = clean_ident(ident)?;

        if ident.contains('/') {
            let path = NotePath::new(self.with_extension(ident));
            if self.is_note(&path) {
                return Ok(path);
            }
            crate::bail_note_not_found!(path);
        }

        let index = indexes.load(scope_dir)?;
        let by_title = index
            .get(ident)
            .map(|record| NotePath::new(record.filename.as_str()))
            .filter(|path| self.is_note(path));
        let literal = Some(NotePath::new(join_dir(scope_dir, &self.with_extension(ident))))
            .filter(|path| self.is_note(path));

        match (by_title, literal) {
            (Some(titled), Some(named)) if titled != named => Err(NoteError::AmbiguousReference {
                reference: ident.to_string(),
                candidates: vec![titled.to_string(), named.to_string()],
            }),
            (Some(path), _) | (None, Some(path)) => Ok(path),
            (None, None) => Err(NoteError::NoteNotFound {
                id: join_dir(scope_dir, ident),
            }),
        }
    }

    /// Resolve a `parent`/target identifier to the directory its notes live in.
    ///
    /// That is the children directory of the note it names, or an existing
    /// plain directory under the root.
    pub fn resolve_folder(&self, ident: &str, indexes: &IndexStore) -> Result<String> {
        let cleaned = clean_ident(ident)?;
        match self.resolve(cleaned, "", indexes) {
            Ok(note) => return Ok(note.children_dir().to_string()),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        let dir = self.strip_extension(cleaned);
        if dir_to_fs(&self.root, dir).is_dir() {
            return Ok(dir.to_string());
        }
        Err(NoteError::not_found("folder", ident))
    }
}
