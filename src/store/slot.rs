//! Key-value slot backends for the persistent mirror.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::StoreError;

/// A string key-value store, the shape of a browser's local storage.
pub trait KeyValueStore {
    /// Read a slot. `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace a slot's value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Copy slot `from` to slot `to` unchanged. A missing `from` copies
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] or [`StoreError::Write`].
    fn copy_raw(&mut self, from: &str, to: &str) -> Result<(), StoreError> {
        if let Some(raw) = self.get(from)? {
            self.set(to, &raw)?;
        }
        Ok(())
    }

    /// Human readable location of a slot, shown in the status bar and `path`.
    fn location(&self, key: &str) -> String;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|source| StoreError::NotText {
                    key: key.to_string(),
                    source,
                }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        // Write beside the target and rename so a crash never leaves half a file.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)
    }

    /// Byte-for-byte file copy, so contents that are not text survive.
    fn copy_raw(&mut self, from: &str, to: &str) -> Result<(), StoreError> {
        let source = self.path_for(from);
        if !source.exists() {
            return Ok(());
        }
        let write_err = |source| StoreError::Write {
            key: to.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        fs::copy(&source, self.path_for(to)).map_err(write_err)?;
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        self.path_for(key).display().to_string()
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        format!("memory:{key}")
    }
}
