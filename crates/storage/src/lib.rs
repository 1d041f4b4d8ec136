//! A small persistent key/value store backed by a single JSON document.
//!
//! Keys keep their insertion order, so [`DatabaseStorage::key`] can address
//! them by position. Every mutation rewrites the whole document through a
//! temporary file that is renamed over the previous document.

use indexmap::IndexMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("storage value could not be (de)serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct DatabaseStorage {
    path: PathBuf,
    data: IndexMap<String, Value>,
}

impl DatabaseStorage {
    /// Loads the document at `path`, creating an empty one if the file does
    /// not exist yet. A file holding only whitespace counts as empty.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StorageError> {
        let path = path.into();

        match fs::read(&path).await {
            Ok(bytes) => {
                let data = if bytes.iter().all(u8::is_ascii_whitespace) {
                    IndexMap::new()
                } else {
                    serde_json::from_slice(&bytes)?
                };

                tracing::debug!(path = %path.display(), entries = data.len(), "opened storage");

                Ok(Self { path, data })
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                let mut storage = Self {
                    path,
                    data: IndexMap::new(),
                };

                storage.initialize().await?;

                Ok(storage)
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops every entry and writes the empty document.
    pub async fn initialize(&mut self) -> Result<(), StorageError> {
        self.data.clear();
        self.persist().await
    }

    pub async fn clear(&mut self) -> Result<(), StorageError> {
        self.initialize().await
    }

    /// Removes the backing file. Deleting a store that was never written is
    /// not an error.
    pub async fn delete(self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "deleted storage");

                Ok(())
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    /// The value under `key`, decoded as `T`.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.data
            .get(key)
            .map(T::deserialize)
            .transpose()
            .map_err(StorageError::from)
    }

    /// Stores `value` under `key`. Overwriting a key keeps its position.
    pub async fn set_item<K: Into<String>, T: Serialize + ?Sized>(
        &mut self,
        key: K,
        value: &T,
    ) -> Result<(), StorageError> {
        let value = serde_json::to_value(value)?;

        self.data.insert(key.into(), value);
        self.persist().await
    }

    /// Removes `key`, returning its raw value. The document is only rewritten
    /// when something was removed.
    pub async fn remove_item(&mut self, key: &str) -> Result<Option<Value>, StorageError> {
        let removed = self.data.shift_remove(key);

        if removed.is_some() {
            self.persist().await?;
        }

        Ok(removed)
    }

    /// The `n`-th key in insertion order.
    pub fn key(&self, n: usize) -> Option<&str> {
        self.data.get_index(n).map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub const fn entries(&self) -> &IndexMap<String, Value> {
        &self.data
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(&self.data)?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp = temp_path(&self.path);

        fs::write(&temp, json).await?;
        fs::rename(&temp, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            entries = self.data.len(),
            "persisted storage"
        );

        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();

    temp.push(".tmp");

    PathBuf::from(temp)
}
