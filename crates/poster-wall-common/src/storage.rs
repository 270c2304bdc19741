//! Device-local facet storage.
//!
//! A wall persists four independent facets (layout settings, title
//! visibility, card order, custom data) as string values under fixed keys,
//! the same shape browser local storage offers the generated page. The
//! `Storage` trait is that shape; `MemoryStorage` backs tests and
//! `FileStorage` backs the command line host.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::model::DEFAULT_NAMESPACE;

/// A string key/value store with local-storage semantics.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Key names of the four persisted facets within one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub settings: String,
    pub show_titles: String,
    pub order: String,
    pub custom_data: String,
}

impl StorageKeys {
    pub fn for_namespace(namespace: &str) -> Self {
        Self {
            settings: format!("{namespace}Settings"),
            show_titles: format!("{namespace}ShowTitles"),
            order: format!("{namespace}Order"),
            custom_data: format!("{namespace}CustomData"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::for_namespace(DEFAULT_NAMESPACE)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Store kept as one JSON object of strings on disk.
///
/// Every mutation rewrites the whole file through a sibling temp file, so a
/// crash never leaves a half-written store behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|source| StorageError::Read {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = items.len(), "Opened facet storage");
        Ok(Self { path, items })
    }

    /// Open the store at `path`, starting empty when its content is not a
    /// JSON object of strings. The damaged file is replaced on the next write.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        match Self::open(path.clone()) {
            Err(StorageError::Corrupt { source, .. }) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %source,
                    "Facet storage is corrupt, starting empty"
                );
                Ok(Self {
                    path,
                    items: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = serde_json::to_string_pretty(&self.items).map_err(|source| {
            StorageError::Serialize {
                key: self.path.display().to_string(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
