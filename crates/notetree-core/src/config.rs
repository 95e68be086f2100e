//! Store configuration for notetree
//!
//! Configuration is optional and lives in `<root>/notetree.toml`. Every key
//! has a default, so a store without the file behaves like a fresh one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NoteError, Result};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Configuration filename, relative to the storage root
pub const CONFIG_FILE: &str = "notetree.toml";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Name of the per-directory index file
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// File extension that marks a file as a note (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// How many numeric suffixes to try before giving up on a filename
    #[serde(default = "default_max_suffix")]
    pub max_suffix: u32,

    /// Only rewrite moved-note references on path boundaries
    #[serde(default = "default_reference_boundaries")]
    pub reference_boundaries: bool,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_index_file() -> String {
    "notes_index.json".to_string()
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_max_suffix() -> u32 {
    1000
}

fn default_reference_boundaries() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: default_version(),
            index_file: default_index_file(),
            extension: default_extension(),
            max_suffix: default_max_suffix(),
            reference_boundaries: default_reference_boundaries(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `notetree.toml` from a storage root, or defaults if it is absent
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(StoreConfig::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NoteError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let extension = self.extension.as_str();
        if extension.is_empty() || extension.contains(['.', '/']) {
            return Err(NoteError::invalid_value("extension", extension));
        }
        if self.index_file.is_empty() || self.index_file.contains('/') {
            return Err(NoteError::invalid_value("index_file", &self.index_file));
        }
        if self.index_file.ends_with(&format!(".{}", extension)) {
            return Err(NoteError::invalid_value(
                "index_file",
                format!("{} (collides with the note extension)", self.index_file),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.version, STORE_FORMAT_VERSION);
        assert_eq!(config.index_file, "notes_index.json");
        assert_eq!(config.extension, "md");
        assert_eq!(config.max_suffix, 1000);
        assert!(config.reference_boundaries);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = StoreConfig {
            max_suffix: 5,
            reference_boundaries: false,
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = StoreConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "extension = \"txt\"\n").unwrap();

        let loaded = StoreConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(loaded.extension, "txt");
        assert_eq!(loaded.index_file, "notes_index.json");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let loaded = StoreConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(loaded, StoreConfig::default());
    }

    #[test]
    fn test_rejects_dotted_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "extension = \".md\"\n").unwrap();

        let err = StoreConfig::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, NoteError::InvalidValue { .. }));
    }
}
