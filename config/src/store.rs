//! Named string slots that survive restarts.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_utils::{atomic_write, ensure_private_dir, recover_bak_file};
use thiserror::Error;

const PREFERENCES_TABLE: &str = "preferences";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preferences at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("preferences at {} are not valid TOML: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("could not determine where to store preferences")]
    NoPath,
    #[error("preference store is read-only")]
    ReadOnly,
}

/// Synchronous key/value persistence.
///
/// Reads never fail: an unreadable slot is reported as absent.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Process-local store for tests and for running without a home directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, holding the given slots.
    #[must_use]
    pub fn read_only<'a>(slots: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            read_only: true,
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Slots kept in the `[preferences]` table of the config file.
///
/// Writes go through `toml_edit` so user comments and other tables survive.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`crate::config_path`].
    pub fn open_default() -> Result<Self, StoreError> {
        crate::config_path().map(Self::new).ok_or(StoreError::NoPath)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<toml_edit::DocumentMut, StoreError> {
        recover_bak_file(&self.path);
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        let doc = match self.read_document() {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!("Treating preference {key:?} as unset: {err}");
                return None;
            }
        };
        doc.get(PREFERENCES_TABLE)
            .and_then(|table| table.get(key))
            .and_then(|item| item.as_str())
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_private_dir(parent).map_err(io_err)?;
        }

        let mut doc = self.read_document()?;
        if !doc.contains_table(PREFERENCES_TABLE) {
            doc[PREFERENCES_TABLE] = toml_edit::Item::Table(toml_edit::Table::new());
        }
        doc[PREFERENCES_TABLE][key] = toml_edit::value(value);

        atomic_write(&self.path, doc.to_string().as_bytes()).map_err(io_err)?;
        tracing::debug!(path = %self.path.display(), key, value, "Persisted preference");
        Ok(())
    }
}
